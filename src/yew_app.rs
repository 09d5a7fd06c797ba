use std::rc::Rc;

use web_sys::{DragEvent, Event, HtmlInputElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::app_core::{AppCore, ThemeMode};
use crate::input;
use crate::persisted_store::LocalStorage;
use postgrid_core::{ImageRef, ModalEvent, ModalPhase, ModalState, Profile};

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<AppCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum GridAction {
    Open(usize),
    DragStart(usize),
    DragEnd,
    Drop { payload: Option<String>, target: usize },
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let app_core = props.core.clone();
    let app_snapshot = use_state(|| app_core.snapshot());
    {
        let app_core = app_core.clone();
        let app_snapshot = app_snapshot.clone();
        use_effect_with((), move |_| {
            let app_core_for_cb = app_core.clone();
            let subscription = app_core.subscribe(Rc::new(move || {
                app_snapshot.set(app_core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }
    let snapshot = (*app_snapshot).clone();

    let on_theme_toggle = {
        let app_core = app_core.clone();
        Callback::from(move |_: MouseEvent| app_core.toggle_theme())
    };
    let on_upload = {
        let app_core = app_core.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };
            let refs = input::object_urls_from_files(&files);
            input.set_value("");
            app_core.append_images(refs);
        })
    };
    let on_remove_all = {
        let app_core = app_core.clone();
        Callback::from(move |_: MouseEvent| app_core.remove_all_images())
    };
    let on_grid_action = {
        let app_core = app_core.clone();
        Callback::from(move |action: GridAction| match action {
            GridAction::Open(index) => app_core.open_image(index),
            GridAction::DragStart(index) => app_core.begin_drag(index),
            GridAction::DragEnd => app_core.end_drag(),
            GridAction::Drop { payload, target } => app_core.drop_on(payload.as_deref(), target),
        })
    };
    let on_modal_event = {
        let app_core = app_core.clone();
        Callback::from(move |event: ModalEvent| app_core.modal_event(event))
    };

    let modal_open = snapshot.modal_phase() != ModalPhase::Closed;
    let (theme_class, theme_label) = match snapshot.theme {
        ThemeMode::Dark => ("theme-dark", "Light"),
        ThemeMode::Light => ("theme-light", "Dark"),
    };
    let remove_all = if snapshot.images.is_empty() {
        html! {}
    } else {
        html! {
            <div class="remove-all">
                <button class="remove-all-button" onclick={on_remove_all}>
                    {"Delete all posts"}
                </button>
            </div>
        }
    };
    let modal = match snapshot.modal.clone() {
        Some(state) => html! {
            <DetailModal
                state={state}
                username={snapshot.profile.username.clone()}
                avatar={snapshot.profile.avatar.clone()}
                on_event={on_modal_event}
            />
        },
        None => html! {},
    };

    html! {
        <div class={classes!("page", theme_class, modal_open.then_some("page-locked"))}>
            <div class="page-inner">
                <button class="theme-toggle" onclick={on_theme_toggle}>{theme_label}</button>
                <ProfileHeader profile={snapshot.profile.clone()} posts={snapshot.posts()} />
                <section class="toolbar">
                    <div class="upload">
                        <label for="file-upload" class="upload-button">{"+"}</label>
                        <input
                            id="file-upload"
                            type="file"
                            accept="image/*"
                            multiple={true}
                            class="hidden"
                            onchange={on_upload}
                        />
                    </div>
                    <nav class="tabs">
                        <button class="tab tab-active">{"Posts"}</button>
                        <button class="tab">{"Saved"}</button>
                        <button class="tab">{"Tagged"}</button>
                    </nav>
                    {remove_all}
                </section>
                <ImageGrid
                    images={snapshot.images.clone()}
                    lifted={snapshot.lifted}
                    on_action={on_grid_action}
                />
            </div>
            {modal}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileHeaderProps {
    profile: Profile,
    posts: usize,
}

#[function_component(ProfileHeader)]
fn profile_header(props: &ProfileHeaderProps) -> Html {
    let profile = &props.profile;
    let avatar = match profile.avatar.as_ref() {
        Some(src) => html! { <img class="avatar" src={src.to_string()} alt="Avatar" /> },
        None => html! { <div class="avatar avatar-placeholder"></div> },
    };
    html! {
        <header class="profile">
            {avatar}
            <div class="profile-meta">
                <h2 class="username">{profile.username.clone()}</h2>
                <div class="counters">
                    <span>{format!("{} posts", props.posts)}</span>
                    <span>{format!("{} followers", profile.followers)}</span>
                    <span>{format!("{} following", profile.following)}</span>
                </div>
                <p class="display-name">{profile.display_name.clone()}</p>
                <ul class="bio">
                    { for profile.bio.iter().map(|line| html! { <li>{line.clone()}</li> }) }
                </ul>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct ImageGridProps {
    images: Vec<ImageRef>,
    lifted: Option<usize>,
    on_action: Callback<GridAction>,
}

/// Tiles are keyed by position; the same reference may appear twice.
#[function_component(ImageGrid)]
fn image_grid(props: &ImageGridProps) -> Html {
    if props.images.is_empty() {
        return html! { <p class="empty">{"No posts yet"}</p> };
    }
    let tiles = props.images.iter().enumerate().map(|(index, image)| {
        let ondragstart = {
            let on_action = props.on_action.clone();
            Callback::from(move |event: DragEvent| {
                input::write_drag_payload(&event, index);
                on_action.emit(GridAction::DragStart(index));
            })
        };
        let ondragend = {
            let on_action = props.on_action.clone();
            Callback::from(move |_: DragEvent| on_action.emit(GridAction::DragEnd))
        };
        let ondragover = Callback::from(|event: DragEvent| event.prevent_default());
        let ondrop = {
            let on_action = props.on_action.clone();
            Callback::from(move |event: DragEvent| {
                event.prevent_default();
                let payload = input::read_drag_payload(&event);
                on_action.emit(GridAction::Drop {
                    payload,
                    target: index,
                });
            })
        };
        let onclick = {
            let on_action = props.on_action.clone();
            Callback::from(move |_: MouseEvent| on_action.emit(GridAction::Open(index)))
        };
        let lifted = props.lifted == Some(index);
        html! {
            <div
                key={index}
                class={classes!("tile", lifted.then_some("tile-lifted"))}
                draggable="true"
                {ondragstart}
                {ondragend}
                {ondragover}
                {ondrop}
            >
                <img
                    class="tile-image"
                    src={image.to_string()}
                    alt="Uploaded"
                    draggable="false"
                    {onclick}
                />
            </div>
        }
    });
    html! {
        <div class="grid">
            { for tiles }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailModalProps {
    state: ModalState,
    username: String,
    avatar: Option<ImageRef>,
    on_event: Callback<ModalEvent>,
}

/// Lightbox for one image. Clicks inside the panel or the confirmation
/// dialog never reach the backdrop handlers behind them.
#[function_component(DetailModal)]
fn detail_modal(props: &DetailModalProps) -> Html {
    let state = &props.state;
    let emit = |event: ModalEvent| {
        let on_event = props.on_event.clone();
        Callback::from(move |click: MouseEvent| {
            click.stop_propagation();
            on_event.emit(event.clone());
        })
    };

    let on_backdrop = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(ModalEvent::Close))
    };
    let on_panel = {
        let on_event = props.on_event.clone();
        let menu_open = state.menu_open();
        Callback::from(move |click: MouseEvent| {
            click.stop_propagation();
            if menu_open {
                on_event.emit(ModalEvent::CloseMenu);
            }
        })
    };
    let on_comment = {
        let on_event = props.on_event.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_event.emit(ModalEvent::EditComment(input.value()));
        })
    };

    let menu = if state.menu_open() {
        html! {
            <div class="menu">
                <button class="menu-delete" onclick={emit(ModalEvent::RequestDelete)}>
                    {"Delete"}
                </button>
            </div>
        }
    } else {
        html! {}
    };
    let confirm = if state.confirming_delete() {
        let stop = Callback::from(|click: MouseEvent| click.stop_propagation());
        html! {
            <div class="confirm-backdrop" onclick={emit(ModalEvent::CancelDelete)}>
                <div class="confirm-dialog" onclick={stop}>
                    <h3>{"Delete post?"}</h3>
                    <p>{"This cannot be undone."}</p>
                    <div class="confirm-actions">
                        <button class="confirm-delete" onclick={emit(ModalEvent::ConfirmDelete)}>
                            {"Delete"}
                        </button>
                        <button class="confirm-cancel" onclick={emit(ModalEvent::CancelDelete)}>
                            {"Cancel"}
                        </button>
                    </div>
                </div>
            </div>
        }
    } else {
        html! {}
    };
    let avatar_style = props
        .avatar
        .as_ref()
        .map(|src| format!("background-image: url({src})"));

    html! {
        <>
            <div class="modal-backdrop" onclick={on_backdrop}>
                <button class="modal-close" onclick={emit(ModalEvent::Close)}>{"✕"}</button>
                <div class="modal-panel" onclick={on_panel}>
                    <div class="modal-image">
                        <img src={state.image().to_string()} alt="Post" />
                    </div>
                    <aside class="modal-side">
                        <div class="modal-header">
                            <div class="modal-author">
                                <div class="modal-avatar" style={avatar_style}></div>
                                <span class="modal-username">{props.username.clone()}</span>
                            </div>
                            <div class="menu-anchor">
                                <button class="menu-toggle" onclick={emit(ModalEvent::ToggleMenu)}>
                                    {"..."}
                                </button>
                                {menu}
                            </div>
                        </div>
                        <div class="modal-actions">
                            <button class="like" onclick={emit(ModalEvent::Like)}>
                                {format!("❤️ {}", state.likes())}
                            </button>
                            <input
                                type="text"
                                class="comment"
                                placeholder="Add a comment..."
                                value={state.comment().to_string()}
                                oninput={on_comment}
                            />
                        </div>
                    </aside>
                </div>
            </div>
            {confirm}
        </>
    }
}

pub(crate) fn run() {
    let app_core = AppCore::new(Rc::new(LocalStorage));
    app_core.load();
    yew::Renderer::<App>::with_props(AppProps { core: app_core }).render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use postgrid_core::{MemoryStore, IMAGES_KEY};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    struct Mounted {
        core: Rc<AppCore>,
        root: Element,
        handle: yew::AppHandle<App>,
    }

    async fn mount(values: &str) -> Mounted {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let backend = MemoryStore::with_entry(IMAGES_KEY, values);
        let core = AppCore::new(Rc::new(backend));
        core.load();
        let handle = yew::Renderer::<App>::with_root_and_props(
            root.clone(),
            AppProps { core: core.clone() },
        )
        .render();
        TimeoutFuture::new(0).await;
        Mounted { core, root, handle }
    }

    async fn click(root: &Element, selector: &str) {
        let element = root
            .query_selector(selector)
            .expect("query selector")
            .unwrap_or_else(|| panic!("{selector} not rendered"));
        element
            .dyn_into::<HtmlElement>()
            .expect("html element")
            .click();
        TimeoutFuture::new(0).await;
    }

    fn phase(core: &AppCore) -> ModalPhase {
        core.snapshot().modal_phase()
    }

    #[wasm_bindgen_test(async)]
    async fn modal_clicks_route_by_layer() {
        let Mounted { core, root, handle } = mount(r#"["blob:a","blob:b"]"#).await;
        core.open_image(0);
        TimeoutFuture::new(0).await;
        assert_eq!(phase(&core), ModalPhase::Open);

        click(&root, ".modal-panel").await;
        assert_eq!(phase(&core), ModalPhase::Open);

        click(&root, ".menu-toggle").await;
        assert_eq!(core.snapshot().modal.map(|modal| modal.menu_open()), Some(true));
        click(&root, ".modal-panel").await;
        assert_eq!(core.snapshot().modal.map(|modal| modal.menu_open()), Some(false));
        assert_eq!(phase(&core), ModalPhase::Open);

        click(&root, ".menu-toggle").await;
        click(&root, ".menu-delete").await;
        assert_eq!(phase(&core), ModalPhase::ConfirmingDelete);

        click(&root, ".confirm-dialog").await;
        assert_eq!(phase(&core), ModalPhase::ConfirmingDelete);

        click(&root, ".confirm-backdrop").await;
        assert_eq!(phase(&core), ModalPhase::Open);

        click(&root, ".modal-backdrop").await;
        assert_eq!(phase(&core), ModalPhase::Closed);
        assert!(root.query_selector(".modal-backdrop").expect("query").is_none());
        assert_eq!(core.snapshot().posts(), 2);

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn confirm_button_deletes_and_closes() {
        let Mounted { core, root, handle } = mount(r#"["blob:a","blob:b","blob:a"]"#).await;
        click(&root, ".tile-image").await;
        assert_eq!(phase(&core), ModalPhase::Open);

        click(&root, ".menu-toggle").await;
        click(&root, ".menu-delete").await;
        click(&root, ".confirm-delete").await;

        let snapshot = core.snapshot();
        assert_eq!(snapshot.modal_phase(), ModalPhase::Closed);
        assert_eq!(snapshot.images, vec![ImageRef::from("blob:b")]);
        assert_eq!(root.query_selector_all(".tile").expect("query").length(), 1);

        handle.destroy();
        root.remove();
    }
}
