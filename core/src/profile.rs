use crate::ImageRef;

/// Build-time profile values, generated from `profile.toml`.
#[derive(Clone, Copy, Debug)]
pub struct ProfileSeed {
    pub username: &'static str,
    pub display_name: &'static str,
    pub avatar: Option<&'static str>,
    pub followers: u64,
    pub following: u64,
    pub bio: &'static [&'static str],
}

include!(concat!(env!("OUT_DIR"), "/profile_seed.rs"));

/// Header metadata. The post count is not stored here; the view derives it
/// from the collection length on every render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub display_name: String,
    pub avatar: Option<ImageRef>,
    pub followers: u64,
    pub following: u64,
    pub bio: Vec<String>,
}

impl Profile {
    pub fn from_seed(seed: &ProfileSeed) -> Self {
        Self {
            username: seed.username.to_string(),
            display_name: seed.display_name.to_string(),
            avatar: seed.avatar.map(ImageRef::from),
            followers: seed.followers,
            following: seed.following,
            bio: seed.bio.iter().map(|line| line.to_string()).collect(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::from_seed(&DEFAULT_PROFILE)
    }
}
