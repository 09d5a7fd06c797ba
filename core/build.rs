use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct ProfileFile {
    username: String,
    display_name: String,
    avatar: Option<String>,
    followers: u64,
    following: u64,
    #[serde(default)]
    bio: Vec<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PROFILE_CONFIG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let profile_path = resolve_profile_path(workspace_root);
    println!("cargo:rerun-if-changed={}", profile_path.display());

    let contents = fs::read_to_string(&profile_path).unwrap_or_else(|err| {
        panic!(
            "failed to read profile config at {}: {err}",
            profile_path.display()
        )
    });

    let profile: ProfileFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse profile config at {}: {err}",
            profile_path.display()
        )
    });

    validate_profile(&profile, &profile_path);

    let avatar = match profile.avatar.as_deref().map(str::trim) {
        Some(src) if !src.is_empty() => format!("Some({})", rust_string(src)),
        _ => "None".to_string(),
    };

    let mut output = String::new();
    writeln!(&mut output, "pub const DEFAULT_PROFILE: ProfileSeed = ProfileSeed {{").unwrap();
    writeln!(&mut output, "    username: {},", rust_string(&profile.username)).unwrap();
    writeln!(
        &mut output,
        "    display_name: {},",
        rust_string(&profile.display_name)
    )
    .unwrap();
    writeln!(&mut output, "    avatar: {},", avatar).unwrap();
    writeln!(&mut output, "    followers: {},", profile.followers).unwrap();
    writeln!(&mut output, "    following: {},", profile.following).unwrap();
    writeln!(&mut output, "    bio: &[").unwrap();
    for line in &profile.bio {
        writeln!(&mut output, "        {},", rust_string(line)).unwrap();
    }
    writeln!(&mut output, "    ],").unwrap();
    writeln!(&mut output, "}};").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("profile_seed.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_profile_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PROFILE_CONFIG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("profile.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn validate_profile(profile: &ProfileFile, profile_path: &Path) {
    if profile.username.trim().is_empty() {
        panic!("profile username cannot be empty in {}", profile_path.display());
    }
    if profile.display_name.trim().is_empty() {
        panic!(
            "profile display_name cannot be empty in {}",
            profile_path.display()
        );
    }
    if let Some(avatar) = profile.avatar.as_deref() {
        if avatar.starts_with("blob:") {
            panic!(
                "profile avatar cannot be a blob URL in {}",
                profile_path.display()
            );
        }
    }
}
