use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

mod config;
mod site;
mod overlay {
    pub mod dom;
    pub mod host;
    pub mod manager;
    pub mod scheduler;
}
mod forms {
    pub mod validator;
}
mod effects {
    pub mod lazy;
    pub mod particles;
    pub mod reveal;
    pub mod scroll;
    pub mod typewriter;
}
mod components {
    pub mod contact_form;
    pub mod gallery;
}
mod pages {
    pub mod home;
}

use effects::scroll::{install_scroll_watcher, scroll_to_anchor, ScrollFrame};
use overlay::dom::DomPort;
use overlay::host::OverlayHost;
use overlay::scheduler::GlooScheduler;
use pages::home::Home;
use site::SiteApi;

/// The overlay host as wired for the browser.
pub type Overlays = OverlayHost<DomPort, GlooScheduler>;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#main-content", "Home"),
    ("#about", "About"),
    ("#events", "Events"),
    ("#team", "Team"),
    ("#contact", "Contact"),
];

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let overflow = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub solid: bool,
    pub hidden: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    // Lock page scroll while the menu is open; Escape closes it. The
    // keydown listener only exists while the menu is open, so Escape with
    // the menu closed reaches nothing here.
    {
        let menu_open = menu_open.clone();
        let is_open = *menu_open;
        use_effect_with_deps(
            move |&open| {
                set_body_scroll_locked(open);
                let mut escape = None;
                if open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let closure = {
                            let menu_open = menu_open.clone();
                            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                                if e.key() == "Escape" {
                                    menu_open.set(false);
                                }
                            })
                                as Box<dyn FnMut(_)>)
                        };
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        );
                        escape = Some((document, closure));
                    }
                }
                move || {
                    if let Some((document, closure)) = escape {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            is_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_click = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_anchor(href);
        })
    };

    html! {
        <nav class={classes!(
            "navbar",
            props.solid.then_some("scrolled"),
            props.hidden.then_some("nav-hidden"),
        )}>
            <div class="nav-container">
                <a class="nav-logo" href="#main-content" onclick={nav_click("#main-content")}>
                    {"ACE"}
                </a>
                <button
                    class={classes!("hamburger", menu_open.then_some("active"))}
                    aria-expanded={menu_open.to_string()}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-menu", menu_open.then_some("active"))}>
                    {
                        for NAV_LINKS.iter().map(|&(href, label)| html! {
                            <li>
                                <a class="nav-link" href={href} onclick={nav_click(href)}>
                                    { label }
                                </a>
                            </li>
                        })
                    }
                </ul>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let site = use_context::<SiteApi>().expect("site context not provided");
    let onclick = Callback::from(move |_: MouseEvent| site.scroll_to_top());

    html! {
        <button
            class={classes!("back-to-top", props.visible.then_some("visible"))}
            aria-label="Back to top"
            title="Back to top"
            onclick={onclick}
        >
            {"↑"}
        </button>
    }
}

const GLOBAL_STYLE: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        background: #0a1428;
        color: #e2e8f0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .skip-link {
        position: absolute;
        top: -40px;
        left: 6px;
        background: #3b82f6;
        color: white;
        padding: 8px;
        text-decoration: none;
        border-radius: 4px;
        z-index: 10000;
        transition: top 0.3s;
    }
    .skip-link:focus { top: 6px; }
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 1000;
        background: rgba(10, 20, 40, 0.95);
        transition: background 0.3s ease, transform 0.3s ease;
    }
    .navbar.scrolled { background: rgba(10, 20, 40, 0.98); }
    .navbar.nav-hidden { transform: translateY(-100%); }
    .nav-container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        color: white;
        font-weight: bold;
        font-size: 1.4rem;
        letter-spacing: 0.2em;
        text-decoration: none;
    }
    .nav-menu {
        display: flex;
        gap: 2rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-link {
        color: rgba(255, 255, 255, 0.85);
        text-decoration: none;
        transition: color 0.2s ease;
    }
    .nav-link:hover { color: #7EB2FF; }
    .hamburger {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 6px;
    }
    .hamburger span {
        width: 24px;
        height: 2px;
        background: white;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .hamburger.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .hamburger.active span:nth-child(2) { opacity: 0; }
    .hamburger.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    @media (max-width: 768px) {
        .hamburger { display: flex; }
        .nav-menu {
            position: fixed;
            top: 0;
            right: 0;
            height: 100vh;
            width: min(70vw, 320px);
            flex-direction: column;
            padding: 6rem 2rem;
            background: rgba(10, 20, 40, 0.98);
            transform: translateX(100%);
            transition: transform 0.3s ease;
        }
        .nav-menu.active { transform: translateX(0); }
    }
    .back-to-top {
        position: fixed;
        bottom: 24px;
        right: 24px;
        width: 44px;
        height: 44px;
        border: none;
        border-radius: 50%;
        background: #3b82f6;
        color: white;
        font-size: 1.2rem;
        cursor: pointer;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
        z-index: 900;
    }
    .back-to-top.visible { opacity: 1; pointer-events: auto; }
    .site-notification {
        position: fixed;
        right: 20px;
        color: white;
        padding: 1rem 1.5rem;
        border-radius: 8px;
        z-index: 10000;
        transform: translateX(120%);
        transition: transform 0.3s ease, top 0.3s ease;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
    }
    .site-notification.visible { transform: translateX(0); }
    .site-notification.info { background: #3b82f6; }
    .site-notification.success { background: #10b981; }
    .site-notification.error { background: #ef4444; }
    .lightbox {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.9);
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        z-index: 10000;
        cursor: pointer;
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .lightbox.visible { opacity: 1; }
    .lightbox-content {
        max-width: 90%;
        max-height: 90%;
        text-align: center;
        transform: scale(0.8);
        transition: transform 0.3s ease;
    }
    .lightbox.visible .lightbox-content { transform: scale(1); }
    .lightbox-content img {
        max-width: 100%;
        max-height: 80vh;
        object-fit: contain;
        border-radius: 10px;
        margin-bottom: 1rem;
    }
    .lightbox-content h3 {
        color: #3b82f6;
        margin: 0 0 0.5rem;
        font-size: 1.5rem;
    }
    .lightbox-content p {
        color: #cbd5e1;
        margin: 0;
        font-size: 1rem;
    }
    .lazy-image { opacity: 0; transition: opacity 0.4s ease; }
    .lazy-image.loaded { opacity: 1; }
    .hero-particle {
        position: absolute;
        width: 2px;
        height: 2px;
        background: rgba(59, 130, 246, 0.3);
        border-radius: 50%;
        pointer-events: none;
        animation: particle-drift 3s ease-out infinite;
    }
    @keyframes particle-drift {
        0% { transform: translate(0, 0); opacity: 0; }
        50% { opacity: 1; }
        100% { transform: translate(var(--drift-x), var(--drift-y)); opacity: 0; }
    }
"#;

#[function_component]
fn App() -> Html {
    let navbar_solid = use_state_eq(|| false);
    let navbar_hidden = use_state_eq(|| false);
    let back_to_top = use_state_eq(|| false);
    let site = use_state(SiteApi::new);
    let overlays = use_state(|| {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document should exist");
        let port = DomPort::new(document);
        let dismiss = port.dismiss_handle();
        let host = OverlayHost::new(port, GlooScheduler);
        dismiss.bind({
            let host = host.clone();
            move |id| host.dismiss(id)
        });
        host
    });

    {
        let navbar_solid = navbar_solid.clone();
        let navbar_hidden = navbar_hidden.clone();
        let back_to_top = back_to_top.clone();
        use_effect_with_deps(
            move |_| {
                let on_frame = Callback::from(move |frame: ScrollFrame| {
                    navbar_solid.set(frame.navbar_solid);
                    navbar_hidden.set(frame.navbar_hidden);
                    back_to_top.set(frame.back_to_top);
                });
                let cleanup = install_scroll_watcher(on_frame);
                move || cleanup()
            },
            (),
        );
    }

    // One-shot page wiring once the first render has produced the markup
    // the observers attach to.
    {
        let site = site.clone();
        use_effect_with_deps(
            move |_| {
                effects::reveal::install_reveal_observer();
                effects::lazy::install_lazy_loading();
                effects::particles::spawn_particles();
                site.measure_page_load();
                info!("ACE site ready - all behaviors attached");
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<SiteApi> context={(*site).clone()}>
            <ContextProvider<Overlays> context={(*overlays).clone()}>
                <style>{ GLOBAL_STYLE }</style>
                <a class="skip-link" href="#main-content">{"Skip to main content"}</a>
                <Nav solid={*navbar_solid} hidden={*navbar_hidden} />
                <Home />
                <BackToTop visible={*back_to_top} />
            </ContextProvider<Overlays>>
        </ContextProvider<SiteApi>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting ACE site");
    yew::Renderer::<App>::new().render();
}
