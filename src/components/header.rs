use std::rc::Rc;

use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{HEADER_SCROLLED_PX, MOBILE_BREAKPOINT_PX};
use crate::content::use_site_content;
use crate::dom;
use crate::sensors::scroll::use_scrolled_past;
use crate::widgets::scroll_lock::ScrollLock;

/// Top-level page sections. The page root owns which one is active.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Hero,
    Company,
    Masterplan,
    News,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::Company, Section::Masterplan, Section::News];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Company => "company",
            Section::Masterplan => "masterplan",
            Section::News => "news",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Company => "Company",
            Section::Masterplan => "Masterplan",
            Section::News => "News",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MenuEvent {
    Toggle,
    Escape,
    LinkClicked,
    OverlayClicked,
    Resized { width: f64 },
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn on(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::Escape | MenuEvent::LinkClicked | MenuEvent::OverlayClicked) => MenuState::Closed,
            (_, MenuEvent::Resized { width }) if width > MOBILE_BREAKPOINT_PX => MenuState::Closed,
            (state, MenuEvent::Resized { .. }) => state,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.on(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn logo() -> Html {
    html! {
        <>
            <span class="header__logo-black">{"hi"}</span>
            <span class="header__logo-red">{"ve"}</span>
            <span class="header__logo-plus">{"+"}</span>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: Section,
    pub on_nav: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { active, on_nav } = props;
    let content = use_site_content();
    let reserve_href = content.hero.cta_link.clone();
    let menu = use_reducer_eq(MenuState::default);
    let is_scrolled = use_scrolled_past(HEADER_SCROLLED_PX);

    // The lock lives exactly as long as the menu is open, unmount included.
    use_effect_with_deps(
        move |open| {
            let lock = if *open { ScrollLock::acquire() } else { None };
            move || drop(lock)
        },
        menu.is_open(),
    );

    {
        let dispatcher = menu.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(MenuEvent::Escape);
            }
        });
    }
    {
        let dispatcher = menu.dispatcher();
        use_event_with_window("resize", move |_: web_sys::Event| {
            if let Some(width) = dom::viewport_width() {
                dispatcher.dispatch(MenuEvent::Resized { width });
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuEvent::Toggle);
        })
    };
    let close_on_overlay = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuEvent::OverlayClicked))
    };
    let nav_click = |section: Section| {
        let menu = menu.clone();
        let on_nav = on_nav.clone();
        Callback::from(move |_: MouseEvent| {
            on_nav.emit(section);
            menu.dispatch(MenuEvent::LinkClicked);
        })
    };

    // Reserving lives on the product page, so bring it back before following the anchor.
    let reserve_click = {
        let menu = menu.clone();
        let on_nav = on_nav.clone();
        Callback::from(move |_: MouseEvent| {
            on_nav.emit(Section::Hero);
            menu.dispatch(MenuEvent::LinkClicked);
        })
    };

    let open = menu.is_open();
    html! {
        <header class={classes!("header", is_scrolled.then(|| "header--scrolled"))}>
            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    transition: background 0.3s ease, padding 0.3s ease;
                    padding: 1.5rem 0;
                }
                .header--scrolled {
                    background: rgba(10, 10, 10, 0.92);
                    backdrop-filter: blur(12px);
                    padding: 0.75rem 0;
                }
                .header__container {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header__logo { font-size: 1.8rem; font-weight: 800; letter-spacing: -0.03em; }
                .header__logo-black { color: #fff; }
                .header__logo-red, .header__logo-plus { color: #CC0000; }
                .header__nav-list { display: flex; gap: 2rem; list-style: none; margin: 0; padding: 0; }
                .header__nav-link, .header__mobile-link {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.7);
                    cursor: pointer;
                    font-size: 0.95rem;
                }
                .header__nav-link--active, .header__mobile-link--active { color: #fff; }
                .header__nav-indicator {
                    display: block;
                    height: 2px;
                    margin-top: 4px;
                    background: #CC0000;
                    transform: scaleX(0);
                    transition: transform 0.3s ease;
                }
                .header__nav-link--active .header__nav-indicator { transform: scaleX(1); }
                .header__actions { display: flex; align-items: center; gap: 1rem; }
                .header__cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #CC0000;
                    color: #fff;
                    border: none;
                    padding: 0.7rem 1.4rem;
                    border-radius: 999px;
                    cursor: pointer;
                    text-decoration: none;
                }
                .header__cta-arrow { width: 16px; height: 16px; }
                .header__mobile-toggle { display: none; background: none; border: none; cursor: pointer; }
                .header__hamburger span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .header__mobile-toggle--open .header__hamburger span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .header__mobile-toggle--open .header__hamburger span:nth-child(2) { opacity: 0; }
                .header__mobile-toggle--open .header__hamburger span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .header__overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .header__overlay--visible { opacity: 1; pointer-events: auto; }
                .header__mobile-menu {
                    position: fixed;
                    top: 0;
                    right: 0;
                    bottom: 0;
                    width: min(360px, 85vw);
                    background: #0a0a0a;
                    padding: 2rem;
                    transform: translateX(100%);
                    transition: transform 0.4s ease;
                    display: flex;
                    flex-direction: column;
                }
                .header__mobile-menu--open { transform: translateX(0); }
                .header__mobile-list { list-style: none; padding: 0; margin: 3rem 0; }
                .header__mobile-item { margin-bottom: 1.5rem; }
                .header__mobile-number { color: #CC0000; margin-right: 1rem; font-size: 0.8rem; }
                .header__mobile-link { font-size: 1.6rem; }
                .header__mobile-cta {
                    margin-top: auto;
                    background: #CC0000;
                    color: #fff;
                    border: none;
                    padding: 1rem;
                    border-radius: 8px;
                    text-align: center;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .header__nav, .header__cta { display: none; }
                    .header__mobile-toggle { display: block; z-index: 101; }
                }
                "#}
            </style>
            <div class="header__container">
                <div class="header__logo">{logo()}</div>

                <nav class="header__nav">
                    <ul class="header__nav-list">
                        { for Section::ALL.iter().enumerate().map(|(index, section)| html! {
                            <li key={section.id()} class="header__nav-item" style={format!("--item-index: {};", index)}>
                                <button
                                    class={classes!("header__nav-link", (*active == *section).then(|| "header__nav-link--active"))}
                                    onclick={nav_click(*section)}
                                >
                                    <span class="header__nav-text">{section.name()}</span>
                                    <span class="header__nav-indicator"></span>
                                </button>
                            </li>
                        }) }
                    </ul>
                </nav>

                <div class="header__actions">
                    <a href={reserve_href.clone()} class="header__cta" onclick={reserve_click.clone()}>
                        <span>{"Reserve Now"}</span>
                        <svg class="header__cta-arrow" viewBox="0 0 24 24" fill="none">
                            <path d="M5 12H19M19 12L12 5M19 12L12 19" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                        </svg>
                    </a>
                    <button
                        class={classes!("header__mobile-toggle", open.then(|| "header__mobile-toggle--open"))}
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                        aria-expanded={open.to_string()}
                    >
                        <span class="header__hamburger">
                            <span></span>
                            <span></span>
                            <span></span>
                        </span>
                    </button>
                </div>
            </div>

            <div
                class={classes!("header__overlay", open.then(|| "header__overlay--visible"))}
                onclick={close_on_overlay}
            />
            <div class={classes!("header__mobile-menu", open.then(|| "header__mobile-menu--open"))}>
                <div class="header__mobile-logo header__logo">{logo()}</div>
                <nav class="header__mobile-nav">
                    <ul class="header__mobile-list">
                        { for Section::ALL.iter().enumerate().map(|(index, section)| html! {
                            <li key={section.id()} class="header__mobile-item" style={format!("--item-index: {};", index)}>
                                <button
                                    class={classes!("header__mobile-link", (*active == *section).then(|| "header__mobile-link--active"))}
                                    onclick={nav_click(*section)}
                                >
                                    <span class="header__mobile-number">{format!("0{}", index + 1)}</span>
                                    <span class="header__mobile-text">{section.name()}</span>
                                </button>
                            </li>
                        }) }
                    </ul>
                </nav>
                <div class="header__mobile-footer">
                    <a href={reserve_href} class="header__mobile-cta" onclick={reserve_click}>
                        {"Reserve Your Flight"}
                    </a>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[MenuEvent]) -> MenuState {
        events.iter().fold(MenuState::default(), |state, e| state.on(*e))
    }

    #[test]
    fn toggle_opens_and_closes() {
        assert_eq!(run(&[MenuEvent::Toggle]), MenuState::Open);
        assert_eq!(run(&[MenuEvent::Toggle, MenuEvent::Toggle]), MenuState::Closed);
    }

    #[test]
    fn escape_closes_and_is_idempotent() {
        assert_eq!(run(&[MenuEvent::Toggle, MenuEvent::Escape]), MenuState::Closed);
        assert_eq!(
            run(&[MenuEvent::Toggle, MenuEvent::Escape, MenuEvent::Escape]),
            MenuState::Closed
        );
        assert_eq!(run(&[MenuEvent::Escape]), MenuState::Closed);
    }

    #[test]
    fn resize_to_desktop_closes() {
        assert_eq!(
            run(&[MenuEvent::Toggle, MenuEvent::Resized { width: 1280.0 }]),
            MenuState::Closed
        );
        assert_eq!(
            run(&[MenuEvent::Toggle, MenuEvent::Resized { width: 400.0 }]),
            MenuState::Open
        );
        assert_eq!(
            run(&[MenuEvent::Toggle, MenuEvent::Resized { width: 768.0 }]),
            MenuState::Open
        );
    }

    #[test]
    fn link_and_overlay_clicks_close() {
        assert_eq!(run(&[MenuEvent::Toggle, MenuEvent::LinkClicked]), MenuState::Closed);
        assert_eq!(run(&[MenuEvent::Toggle, MenuEvent::OverlayClicked]), MenuState::Closed);
    }

    #[test]
    fn escape_on_closed_menu_does_not_rerender() {
        let state = Rc::new(MenuState::Closed);
        let next = state.clone().reduce(MenuEvent::Escape);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
