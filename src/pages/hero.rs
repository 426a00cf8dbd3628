use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{self, HERO_LOAD_DELAY_MS};
use crate::content::use_site_content;
use crate::sensors::scroll::use_scroll_progress;
use crate::sensors::viewport::Viewport;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub viewport: Viewport,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = use_site_content();
    let hero = &content.hero;
    let viewport = props.viewport;
    let hero_ref = use_node_ref();
    let is_loaded = use_state_eq(|| false);
    let scroll_progress = use_scroll_progress(hero_ref.clone());

    {
        let is_loaded = is_loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(HERO_LOAD_DELAY_MS, move || is_loaded.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    html! {
        <section
            ref={hero_ref}
            id="hero"
            class={classes!(
                "hero-archer",
                is_loaded.then(|| "hero-archer--loaded"),
                viewport.is_mobile.then(|| "hero-archer--mobile"),
                viewport.reduced_motion.then(|| "hero-archer--reduced-motion"),
            )}
            style={format!("--scroll-progress: {:.4};", scroll_progress)}
            aria-label="Hero section"
            role="region"
        >
            <style>
                {r#"
                .hero-archer {
                    position: relative;
                    height: 100vh;
                    min-height: 600px;
                    overflow: hidden;
                    color: #fff;
                    background: #000;
                }
                .hero-archer__media { position: absolute; inset: 0; }
                .hero-archer__background-image {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    transform: scale(calc(1.05 + var(--scroll-progress) * 0.1)) translateY(calc(var(--scroll-progress) * 15%));
                    opacity: 0;
                    transition: opacity 1.2s ease;
                }
                .hero-archer--loaded .hero-archer__background-image { opacity: 1; }
                .hero-archer--reduced-motion .hero-archer__background-image { transform: none; transition: none; }
                .hero-archer__overlay--gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, rgba(0,0,0,0.35) 0%, rgba(0,0,0,0) 40%, rgba(0,0,0,0.75) 100%);
                }
                .hero-archer__skip-link { position: absolute; left: -9999px; }
                .hero-archer__skip-link:focus { left: 1rem; top: 1rem; z-index: 10; }
                .hero-archer__container {
                    position: relative;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    opacity: calc(1 - var(--scroll-progress) * 1.5);
                }
                .hero-archer__title { font-size: clamp(3rem, 9vw, 8rem); line-height: 0.95; margin: 0; }
                .hero-archer__title-line { display: block; overflow: hidden; }
                .hero-archer__title-text { display: inline-block; transform: translateY(100%); transition: transform 1s cubic-bezier(0.2, 0.8, 0.2, 1); }
                .hero-archer--loaded .hero-archer__title-text { transform: translateY(0); }
                .hero-archer__title-text--outline { color: transparent; -webkit-text-stroke: 2px #fff; }
                .hero-archer__bottom-bar { position: absolute; left: 0; right: 0; bottom: 0; border-top: 1px solid rgba(255,255,255,0.15); }
                .hero-archer__bottom-container {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 1.5rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .hero-archer__stats { display: flex; align-items: center; gap: 1.5rem; }
                .hero-archer__stat-value { font-size: 1.6rem; font-weight: 700; margin-right: 0.35rem; }
                .hero-archer__stat-label { opacity: 0.7; font-size: 0.85rem; }
                .hero-archer__stat-divider { width: 1px; height: 28px; background: rgba(255,255,255,0.25); }
                .hero-archer__announcement { display: flex; align-items: center; gap: 0.75rem; }
                .hero-archer__announcement-badge { background: #CC0000; padding: 0.2rem 0.6rem; border-radius: 999px; font-size: 0.75rem; }
                .hero-archer__announcement-link { color: #fff; display: inline-flex; align-items: center; gap: 0.3rem; }
                .hero-archer__announcement-link svg { width: 14px; height: 14px; }
                .hero-archer__frame { position: absolute; width: 40px; height: 40px; border-color: rgba(255,255,255,0.5); border-style: solid; border-width: 0; }
                .hero-archer__frame--tl { top: 100px; left: 2rem; border-top-width: 1px; border-left-width: 1px; }
                .hero-archer__frame--tr { top: 100px; right: 2rem; border-top-width: 1px; border-right-width: 1px; }
                .hero-archer__frame--bl { bottom: 110px; left: 2rem; border-bottom-width: 1px; border-left-width: 1px; }
                .hero-archer__frame--br { bottom: 110px; right: 2rem; border-bottom-width: 1px; border-right-width: 1px; }
                .hero-archer__scroll-indicator { position: absolute; right: 2rem; bottom: 120px; display: flex; flex-direction: column; align-items: center; gap: 0.5rem; font-size: 0.7rem; letter-spacing: 0.2em; }
                .hero-archer__scroll-line { width: 1px; height: 48px; background: rgba(255,255,255,0.3); position: relative; overflow: hidden; }
                .hero-archer__scroll-dot { position: absolute; width: 100%; height: 12px; background: #fff; animation: heroScroll 2s ease-in-out infinite; }
                .hero-archer--reduced-motion .hero-archer__scroll-dot { animation: none; }
                @keyframes heroScroll {
                    0% { transform: translateY(-12px); }
                    100% { transform: translateY(48px); }
                }
                @media (max-width: 768px) {
                    .hero-archer__stats { gap: 0.9rem; }
                    .hero-archer__stat-value { font-size: 1.2rem; }
                    .hero-archer__scroll-indicator { display: none; }
                }
                "#}
            </style>
            <div class="hero-archer__media">
                <div
                    class="hero-archer__background-image"
                    style={format!("background-image: url({});", config::asset_url(&hero.background))}
                    role="img"
                    aria-label="Air Taxi aircraft"
                />
            </div>
            <div class="hero-archer__overlay hero-archer__overlay--gradient"></div>

            <a href="#main-content" class="hero-archer__skip-link">{"Skip to main content"}</a>

            <div class="hero-archer__container">
                <div class="hero-archer__content">
                    <div class="hero-archer__headline-group hero-archer__headline-group--active">
                        <h1 class="hero-archer__title">
                            <span class="hero-archer__title-line">
                                <span class="hero-archer__title-text">{&hero.headline}</span>
                            </span>
                            <span class="hero-archer__title-line">
                                <span class="hero-archer__title-text hero-archer__title-text--outline">
                                    {&hero.subline}
                                </span>
                            </span>
                        </h1>
                    </div>
                </div>
            </div>

            <div class="hero-archer__bottom-bar">
                <div class="hero-archer__bottom-container">
                    <div class="hero-archer__stats" role="list" aria-label="Aircraft specifications">
                        { for hero.stats.iter().enumerate().map(|(index, stat)| html! {
                            <>
                                if index > 0 {
                                    <div class="hero-archer__stat-divider" aria-hidden="true"></div>
                                }
                                <div class="hero-archer__stat" role="listitem">
                                    <span class="hero-archer__stat-value">{&stat.value}</span>
                                    <span class="hero-archer__stat-label">{&stat.label}</span>
                                </div>
                            </>
                        }) }
                    </div>

                    if let Some(announcement) = &hero.announcement {
                        <div class="hero-archer__announcement">
                            <span class="hero-archer__announcement-badge" aria-label="New announcement">
                                {&announcement.badge}
                            </span>
                            <span class="hero-archer__announcement-text">{&announcement.text}</span>
                            <a
                                href={announcement.href.clone()}
                                class="hero-archer__announcement-link"
                                aria-label={format!("Read more about {}", announcement.text)}
                            >
                                {"Read More"}
                                <svg viewBox="0 0 24 24" fill="none" aria-hidden="true">
                                    <path d="M7 17L17 7M17 7H7M17 7V17" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                                </svg>
                            </a>
                        </div>
                    }
                </div>
            </div>

            if !viewport.is_mobile {
                <div class="hero-archer__frame hero-archer__frame--tl" aria-hidden="true"></div>
                <div class="hero-archer__frame hero-archer__frame--tr" aria-hidden="true"></div>
                <div class="hero-archer__frame hero-archer__frame--bl" aria-hidden="true"></div>
                <div class="hero-archer__frame hero-archer__frame--br" aria-hidden="true"></div>
            }

            <div class="hero-archer__scroll-indicator" aria-hidden="true">
                <span class="hero-archer__scroll-text">{"Scroll"}</span>
                <div class="hero-archer__scroll-line">
                    <div class="hero-archer__scroll-dot"></div>
                </div>
            </div>
        </section>
    }
}
