use std::rc::Rc;

use yew::prelude::*;

use crate::components::comparison_showcase::ComparisonShowcase;
use crate::config::{
    self, FEATURE_ROTATE_MS, REVEAL_MARGIN, REVEAL_THRESHOLD, SHOWCASE_REVEAL_MARGIN,
    SHOWCASE_REVEAL_THRESHOLD,
};
use crate::content::{split_lines, use_site_content, SafetyIcon, SafetyStat, Spec};
use crate::dom;
use crate::newsletter::NewsletterForm;
use crate::sensors::scroll::use_parallax;
use crate::sensors::viewport::Viewport;
use crate::sensors::visibility::{node_for, use_reveal, RevealTarget};
use crate::widgets::carousel::{use_carousel, CarouselAction};
use crate::widgets::cursor_glow::CursorGlow;
use crate::widgets::deferred_video::DeferredVideo;

const SECTION_KEYS: [&str; 7] = ["hero", "safety", "features", "compare", "specs", "timeline", "cta"];

/// Safety stats render as a row of three over a row of two.
const SAFETY_FIRST_ROW: usize = 3;

/// Reservation actions offered at the bottom of the product page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CtaAction {
    Reserve,
    ContactSales,
}

impl CtaAction {
    const ALL: [CtaAction; 2] = [CtaAction::Reserve, CtaAction::ContactSales];

    fn label(&self) -> &'static str {
        match self {
            CtaAction::Reserve => "Reserve Now",
            CtaAction::ContactSales => "Contact Sales",
        }
    }

    fn is_primary(&self) -> bool {
        matches!(self, CtaAction::Reserve)
    }
}

fn arrow_icon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="M5 12H19M19 12L12 5M19 12L12 19" />
        </svg>
    }
}

fn showcase_key(index: usize) -> String {
    format!("showcase-{}", index)
}

fn reveal_targets(showcase_count: usize) -> Vec<RevealTarget> {
    let sections = SECTION_KEYS
        .iter()
        .map(|key| RevealTarget::new(*key, REVEAL_THRESHOLD, REVEAL_MARGIN));
    let showcases = (0..showcase_count).map(|i| {
        RevealTarget::new(showcase_key(i), SHOWCASE_REVEAL_THRESHOLD, SHOWCASE_REVEAL_MARGIN)
    });
    sections.chain(showcases).collect()
}

/// Groups specs by category, keeping categories in order of first appearance.
fn group_specs(specs: &[Spec]) -> Vec<(&'static str, Vec<&Spec>)> {
    let mut groups: Vec<(&'static str, Vec<&Spec>)> = Vec::new();
    for spec in specs {
        let category = spec.category();
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(spec),
            None => groups.push((category, vec![spec])),
        }
    }
    groups
}

fn multiline(text: &str) -> Html {
    html! {
        { for split_lines(text).enumerate().map(|(i, line)| html! {
            <>
                if i > 0 { <br/> }
                {line}
            </>
        }) }
    }
}

fn safety_icon(icon: SafetyIcon) -> Html {
    let path = match icon {
        SafetyIcon::FlightControl => "M12 2L3 7v6c0 5 3.8 9.3 9 10 5.2-.7 9-5 9-10V7l-9-5z",
        SafetyIcon::Power => "M13 2L4 14h7l-1 8 9-12h-7l1-8z",
        SafetyIcon::Battery => "M6 7h11a2 2 0 012 2v6a2 2 0 01-2 2H6a2 2 0 01-2-2V9a2 2 0 012-2zm15 3v4",
        SafetyIcon::Communication => "M5 12.5a10 10 0 0114 0M8.5 16a5 5 0 017 0M12 19.5h.01M2 9a15 15 0 0120 0",
        SafetyIcon::Navigation => "M12 2a10 10 0 100 20 10 10 0 000-20zm4 6l-2.5 5.5L8 16l2.5-5.5L16 8z",
    };
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path d={path} stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductSectionProps {
    pub viewport: Viewport,
}

#[function_component(ProductSection)]
pub fn product_section(props: &ProductSectionProps) -> Html {
    let content = use_site_content();
    let product = &content.product;
    let viewport = props.viewport;

    let showcase_count = product.showcase_sections.len();
    let targets: Rc<Vec<RevealTarget>> = use_memo(|count| reveal_targets(*count), showcase_count);
    let visibility = use_reveal(targets.clone());
    let revealed = |key: &str| visibility.is_revealed(key);
    let reveal_class = |key: &str| classes!("reveal", revealed(key).then(|| "reveal--visible"));
    let node = |key: &str| node_for(&targets, key);

    let layers: Rc<Vec<NodeRef>> = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect(),
        showcase_count,
    );
    use_parallax(if viewport.reduced_motion {
        Rc::new(Vec::new())
    } else {
        layers.clone()
    });

    let features = use_carousel(product.feature_cards.len(), FEATURE_ROTATE_MS, !viewport.reduced_motion);
    let hover_pauses = !viewport.touch_primary;
    let on_grid_enter = {
        let features = features.clone();
        Callback::from(move |_: MouseEvent| {
            if hover_pauses {
                features.dispatch(CarouselAction::HoverPause);
            }
        })
    };
    let on_grid_leave = {
        let features = features.clone();
        Callback::from(move |_: MouseEvent| {
            if hover_pauses {
                features.dispatch(CarouselAction::HoverResume { now: dom::now_ms() });
            }
        })
    };
    let on_grid_focus = {
        let features = features.clone();
        Callback::from(move |_: FocusEvent| features.dispatch(CarouselAction::FocusPause))
    };
    let on_grid_blur = {
        let features = features.clone();
        Callback::from(move |e: FocusEvent| {
            if dom::focus_left(&e) {
                features.dispatch(CarouselAction::FocusResume { now: dom::now_ms() });
            }
        })
    };
    let activate_card = |index: usize| {
        let features = features.clone();
        Callback::from(move |_: MouseEvent| {
            features.dispatch(CarouselAction::GoTo { index, now: dom::now_ms() })
        })
    };

    let (safety_top, safety_bottom) = product
        .safety_stats
        .split_at(SAFETY_FIRST_ROW.min(product.safety_stats.len()));
    let safety_card = |stat: &SafetyStat| html! {
        <div key={stat.label.clone()} class="product-safety__card">
            <div class="product-safety__icon">{safety_icon(stat.icon)}</div>
            <div class="product-safety__value">
                {&stat.value}
                <span class="product-safety__unit">{&stat.unit}</span>
            </div>
            <div class="product-safety__label">{&stat.label}</div>
        </div>
    };

    html! {
        <section id="main-content" class={classes!(
            "product-page",
            viewport.reduced_motion.then(|| "product-page--reduced-motion"),
        )}>
            <style>
                {r#"
                .product-page { position: relative; background: #0a0a0a; color: #fff; overflow: hidden; }
                .product-page .reveal { opacity: 0; transform: translateY(40px); transition: opacity 0.9s ease, transform 0.9s ease; }
                .product-page .reveal--visible { opacity: 1; transform: none; }
                .product-page--reduced-motion .reveal { opacity: 1; transform: none; transition: none; }
                .product-container { max-width: 1400px; margin: 0 auto; padding: 0 2rem; }
                .product-eyebrow { text-transform: uppercase; letter-spacing: 0.25em; font-size: 0.75rem; color: #CC0000; }
                .product-heading { font-size: clamp(2rem, 4vw, 3.2rem); margin: 0.5rem 0 2.5rem; }

                .product-hero { position: relative; min-height: 100vh; display: flex; align-items: flex-end; }
                .product-hero__video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .product-hero__shade { position: absolute; inset: 0; background: linear-gradient(180deg, rgba(0,0,0,0.1), rgba(0,0,0,0.85)); }
                .product-hero__content { position: relative; padding-bottom: 6rem; }
                .product-hero__name { font-size: clamp(3rem, 8vw, 7rem); margin: 0; }
                .product-hero__tagline { font-size: 1.3rem; opacity: 0.8; }
                .product-hero__subtitle { max-width: 520px; opacity: 0.7; }
                .product-hero__specs { display: flex; gap: 3rem; flex-wrap: wrap; margin-top: 2.5rem; }
                .product-hero__spec-value { font-size: 2rem; font-weight: 700; }
                .product-hero__spec-unit { font-size: 0.9rem; margin-left: 0.3rem; opacity: 0.7; }
                .product-hero__spec-label { font-size: 0.8rem; opacity: 0.6; text-transform: uppercase; letter-spacing: 0.15em; }

                .product-safety { padding: 8rem 0; }
                .product-safety__row { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-bottom: 1.5rem; }
                .product-safety__row--bottom { grid-template-columns: repeat(2, 1fr); max-width: 66%; margin: 0 auto; }
                .product-safety__card { border: 1px solid rgba(255,255,255,0.1); border-radius: 16px; padding: 2rem; background: rgba(255,255,255,0.02); }
                .product-safety__icon svg { width: 36px; height: 36px; color: #CC0000; }
                .product-safety__value { font-size: 2.8rem; font-weight: 800; margin-top: 1rem; }
                .product-safety__unit { font-size: 1rem; font-weight: 400; opacity: 0.6; margin-left: 0.4rem; }
                .product-safety__label { opacity: 0.7; }

                .product-features { padding: 6rem 0; }
                .product-features__grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                .product-feature { position: relative; border-radius: 16px; overflow: hidden; min-height: 420px; background-size: cover; background-position: center; transition: transform 0.5s ease; }
                .product-feature::after { content: ""; position: absolute; inset: 0; background: linear-gradient(180deg, transparent 30%, rgba(0,0,0,0.85)); }
                .product-feature--active { transform: scale(1.02); box-shadow: 0 0 0 2px #CC0000; }
                .product-feature__body { position: absolute; left: 0; right: 0; bottom: 0; padding: 1.75rem; z-index: 1; }
                .product-feature__title { margin: 0 0 0.5rem; }
                .product-feature__description { opacity: 0; max-height: 0; transition: opacity 0.4s ease, max-height 0.4s ease; margin: 0; }
                .product-feature--active .product-feature__description { opacity: 0.8; max-height: 8rem; }
                .product-features__progress { display: flex; gap: 0.5rem; margin-top: 1.5rem; }
                .product-features__bar { flex: 1; height: 2px; background: rgba(255,255,255,0.15); }
                .product-features__bar--active { background: #CC0000; }

                .product-compare { padding: 6rem 0; }

                .product-showcase { position: relative; min-height: 90vh; display: flex; align-items: center; overflow: hidden; }
                .product-showcase__background { position: absolute; inset: -15% 0; background-size: cover; background-position: center; will-change: transform; }
                .product-showcase__shade { position: absolute; inset: 0; background: rgba(0,0,0,0.55); }
                .product-showcase__content { position: relative; max-width: 640px; }
                .product-showcase--center .product-showcase__content { margin: 0 auto; text-align: center; }
                .product-showcase--right .product-showcase__content { margin-left: auto; text-align: right; }
                .product-showcase__title { font-size: clamp(2rem, 4vw, 3.5rem); margin: 0.5rem 0 1rem; }

                .product-specs { padding: 8rem 0; }
                .product-specs__highlights { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; margin-bottom: 4rem; }
                .product-specs__highlight { border: 1px solid rgba(255,255,255,0.1); border-radius: 16px; padding: 2rem; }
                .product-specs__highlight-stats { display: flex; gap: 2.5rem; margin-top: 1.5rem; }
                .product-specs__stat-value { font-size: 2rem; font-weight: 700; }
                .product-specs__stat-unit { margin-left: 0.3rem; opacity: 0.6; }
                .product-specs__stat-label { font-size: 0.8rem; opacity: 0.6; }
                .product-specs__groups { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                .product-specs__group-title { color: #CC0000; text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.75rem; }
                .product-specs__row { display: flex; justify-content: space-between; padding: 0.75rem 0; border-bottom: 1px solid rgba(255,255,255,0.08); }
                .product-specs__row-label { opacity: 0.65; }

                .product-timeline { padding: 6rem 0; }
                .product-timeline__track { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; position: relative; }
                .product-timeline__item { border-top: 2px solid rgba(255,255,255,0.15); padding-top: 1.25rem; }
                .product-timeline__item--completed { border-color: #fff; }
                .product-timeline__item--current { border-color: #CC0000; }
                .product-timeline__item--upcoming { opacity: 0.55; }
                .product-timeline__year { font-size: 1.6rem; font-weight: 700; }
                .product-timeline__status { font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.2em; opacity: 0.7; }

                .product-cta { position: relative; padding: 10rem 0; text-align: center; background-size: cover; background-position: center; }
                .product-cta__shade { position: absolute; inset: 0; background: rgba(0,0,0,0.65); }
                .product-cta__content { position: relative; }
                .product-cta__actions { display: flex; justify-content: center; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }
                .product-cta__btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.9rem 1.8rem; border-radius: 999px; cursor: pointer; font-size: 1rem; }
                .product-cta__btn svg, .product-showcase__cta svg { width: 16px; height: 16px; }
                .product-cta__btn--primary { background: #CC0000; color: #fff; border: none; }
                .product-cta__btn--secondary { background: none; color: #fff; border: 1px solid rgba(255,255,255,0.4); }
                .product-showcase__cta { display: inline-flex; align-items: center; gap: 0.5rem; margin-top: 1.5rem; background: none; color: #fff; border: 1px solid rgba(255,255,255,0.4); border-radius: 999px; padding: 0.75rem 1.5rem; cursor: pointer; }
                .product-cta__badges { display: flex; justify-content: center; flex-wrap: wrap; gap: 0.75rem; margin: 2rem 0; }
                .product-cta__badge { border: 1px solid rgba(255,255,255,0.25); border-radius: 999px; padding: 0.4rem 1rem; font-size: 0.8rem; }
                .product-cta .newsletter { justify-content: center; max-width: 520px; margin: 0 auto; }

                .cursor-glow { position: fixed; width: 480px; height: 480px; margin: -240px 0 0 -240px; border-radius: 50%; pointer-events: none; background: radial-gradient(circle, rgba(204,0,0,0.12), transparent 65%); z-index: 0; }

                @media (max-width: 768px) {
                    .product-safety__row, .product-safety__row--bottom { grid-template-columns: 1fr; max-width: none; }
                    .product-features__grid, .product-specs__highlights { grid-template-columns: 1fr; }
                    .product-specs__groups, .product-timeline__track { grid-template-columns: repeat(2, 1fr); }
                    .product-feature { min-height: 320px; }
                }
                "#}
            </style>

            if !viewport.touch_primary && !viewport.reduced_motion {
                <CursorGlow />
            }

            <div ref={node("hero")} class="product-hero">
                <DeferredVideo
                    class="product-hero__video"
                    src={config::asset_url(&product.video)}
                    poster={config::asset_url(&product.poster)}
                    load={revealed("hero")}
                />
                <div class="product-hero__shade"></div>
                <div class={classes!("product-container", "product-hero__content", reveal_class("hero"))}>
                    <span class="product-eyebrow">{&product.company}</span>
                    <h1 class="product-hero__name">{&product.name}</h1>
                    <p class="product-hero__tagline">{&product.tagline}</p>
                    <p class="product-hero__subtitle">{multiline(&product.hero_subtitle)}</p>
                    <div class="product-hero__specs">
                        { for product.specs.iter().map(|spec| html! {
                            <div key={spec.label.clone()} class="product-hero__spec">
                                <div>
                                    <span class="product-hero__spec-value">{spec.display_value()}</span>
                                    <span class="product-hero__spec-unit">{&spec.unit}</span>
                                </div>
                                <div class="product-hero__spec-label">{&spec.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div ref={node("safety")} class={classes!("product-safety", reveal_class("safety"))}>
                <div class="product-container">
                    <span class="product-eyebrow">{"Safety First"}</span>
                    <h2 class="product-heading">{"Redundancy in every system"}</h2>
                    <div class="product-safety__row">
                        { for safety_top.iter().map(safety_card) }
                    </div>
                    if !safety_bottom.is_empty() {
                        <div class="product-safety__row product-safety__row--bottom">
                            { for safety_bottom.iter().map(safety_card) }
                        </div>
                    }
                </div>
            </div>

            <div ref={node("features")} class={classes!("product-features", reveal_class("features"))}>
                <div class="product-container">
                    <span class="product-eyebrow">{"Design"}</span>
                    <h2 class="product-heading">{"Built for the sky"}</h2>
                    <div
                        class="product-features__grid"
                        onmouseenter={on_grid_enter}
                        onmouseleave={on_grid_leave}
                        onfocusin={on_grid_focus}
                        onfocusout={on_grid_blur}
                    >
                        { for product.feature_cards.iter().enumerate().map(|(index, card)| html! {
                            <article
                                key={card.id.clone()}
                                class={classes!(
                                    "product-feature",
                                    (index == features.index).then(|| "product-feature--active"),
                                )}
                                style={format!("background-image: url({});", config::asset_url(&card.image))}
                                onmouseenter={activate_card(index)}
                            >
                                <div class="product-feature__body">
                                    <h3 class="product-feature__title">{&card.title}</h3>
                                    <p class="product-feature__description">{&card.description}</p>
                                </div>
                            </article>
                        }) }
                    </div>
                    <div class="product-features__progress" aria-hidden="true">
                        { for (0..product.feature_cards.len()).map(|index| html! {
                            <span class={classes!(
                                "product-features__bar",
                                (index == features.index).then(|| "product-features__bar--active"),
                            )} />
                        }) }
                    </div>
                </div>
            </div>

            <div ref={node("compare")} class={classes!("product-compare", reveal_class("compare"))}>
                <ComparisonShowcase slides={product.comparisons.clone()} {viewport} />
            </div>

            { for product.showcase_sections.iter().enumerate().map(|(index, section)| {
                let key = showcase_key(index);
                let is_revealed = revealed(&key);
                let layer = layers.get(index).cloned().unwrap_or_default();
                html! {
                    <div
                        key={section.id.clone()}
                        ref={node(&key)}
                        class={classes!(
                            "product-showcase",
                            format!("product-showcase--{}", section.alignment.as_str()),
                            is_revealed.then(|| "reveal--visible"),
                        )}
                    >
                        <div
                            ref={layer}
                            class="product-showcase__background"
                            style={is_revealed.then(|| format!(
                                "background-image: url({});",
                                config::asset_url(&section.image)
                            ))}
                        />
                        <div class="product-showcase__shade"></div>
                        <div class="product-container">
                            <div class={classes!("product-showcase__content", "reveal", is_revealed.then(|| "reveal--visible"))}>
                                <span class="product-eyebrow">{&section.subtitle}</span>
                                <h2 class="product-showcase__title">{multiline(&section.title)}</h2>
                                <p>{&section.description}</p>
                                <button class="product-showcase__cta">
                                    <span>{"Learn More"}</span>
                                    {arrow_icon()}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }) }

            <div ref={node("specs")} id="specs" class={classes!("product-specs", reveal_class("specs"))}>
                <div class="product-container">
                    <span class="product-eyebrow">{"Technology"}</span>
                    <h2 class="product-heading">{"Specifications"}</h2>
                    <div class="product-specs__highlights">
                        { for product.tech_highlights.iter().map(|highlight| html! {
                            <div key={highlight.id.clone()} class="product-specs__highlight">
                                <h3>{&highlight.title}</h3>
                                <p>{&highlight.description}</p>
                                <div class="product-specs__highlight-stats">
                                    { for highlight.stats.iter().map(|stat| html! {
                                        <div>
                                            <div>
                                                <span class="product-specs__stat-value">{&stat.value}</span>
                                                <span class="product-specs__stat-unit">{&stat.unit}</span>
                                            </div>
                                            <div class="product-specs__stat-label">{&stat.label}</div>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="product-specs__groups">
                        { for group_specs(&product.detailed_specs).into_iter().map(|(category, specs)| html! {
                            <div key={category} class="product-specs__group">
                                <h4 class="product-specs__group-title">{category}</h4>
                                { for specs.into_iter().map(|spec| html! {
                                    <div class="product-specs__row">
                                        <span class="product-specs__row-label">{&spec.label}</span>
                                        <span>{format!("{} {}", spec.display_value(), spec.unit)}</span>
                                    </div>
                                }) }
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div ref={node("timeline")} class={classes!("product-timeline", reveal_class("timeline"))}>
                <div class="product-container">
                    <span class="product-eyebrow">{"Roadmap"}</span>
                    <h2 class="product-heading">{"The road to launch"}</h2>
                    <ol class="product-timeline__track">
                        { for product.timeline.iter().map(|milestone| html! {
                            <li
                                key={milestone.year.clone()}
                                class={classes!(
                                    "product-timeline__item",
                                    format!("product-timeline__item--{}", milestone.status.as_str()),
                                )}
                            >
                                <div class="product-timeline__year">{&milestone.year}</div>
                                <div>{&milestone.title}</div>
                                <div class="product-timeline__status">{milestone.status.as_str()}</div>
                            </li>
                        }) }
                    </ol>
                </div>
            </div>

            <div
                ref={node("cta")}
                id="reserve"
                class="product-cta"
                style={revealed("cta").then(|| format!(
                    "background-image: url({});",
                    config::asset_url(&product.cta_background)
                ))}
            >
                <div class="product-cta__shade"></div>
                <div class={classes!("product-container", "product-cta__content", reveal_class("cta"))}>
                    <h2 class="product-heading">{"Experience the Future of Flight"}</h2>
                    <div class="product-cta__badges">
                        { for product.trust_badges.iter().map(|badge| html! {
                            <span key={badge.clone()} class="product-cta__badge">{badge}</span>
                        }) }
                    </div>
                    <p class="product-cta__description">
                        {format!("Be among the first to reserve your seat on the {}", product.name)}
                    </p>
                    <div class="product-cta__actions">
                        { for CtaAction::ALL.iter().map(|action| html! {
                            <button
                                key={action.label()}
                                class={classes!(
                                    "product-cta__btn",
                                    if action.is_primary() { "product-cta__btn--primary" } else { "product-cta__btn--secondary" },
                                )}
                            >
                                <span>{action.label()}</span>
                                if action.is_primary() {
                                    {arrow_icon()}
                                }
                            </button>
                        }) }
                    </div>
                    <NewsletterForm button_label="Get Updates" />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(label: &str) -> Spec {
        Spec {
            label: label.into(),
            value: "1".into(),
            unit: "".into(),
        }
    }

    #[test]
    fn reveal_targets_cover_sections_and_showcases() {
        let targets = reveal_targets(2);
        let keys: Vec<&str> = targets.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(
            keys,
            ["hero", "safety", "features", "compare", "specs", "timeline", "cta", "showcase-0", "showcase-1"]
        );
        assert_eq!(targets[0].threshold, 0.15);
        assert_eq!(targets[0].root_margin, "0px 0px -50px 0px");
        assert_eq!(targets[8].threshold, 0.18);
        assert_eq!(targets[8].root_margin, "0px 0px -60px 0px");
    }

    #[test]
    fn specs_group_in_order_of_first_appearance() {
        let specs = vec![
            spec("Max Range"),
            spec("Passengers"),
            spec("Top Speed"),
            spec("Noise"),
            spec("MTOW"),
        ];
        let groups = group_specs(&specs);
        let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Performance", "Capacity", "General", "Dimensions"]);
        let performance: Vec<&str> = groups[0].1.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(performance, ["Max Range", "Top Speed"]);
    }

    #[test]
    fn cta_offers_reserve_and_contact_sales() {
        let labels: Vec<&str> = CtaAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Reserve Now", "Contact Sales"]);
        let primary: Vec<CtaAction> = CtaAction::ALL.iter().copied().filter(|a| a.is_primary()).collect();
        assert_eq!(primary, [CtaAction::Reserve]);
    }

    #[test]
    fn no_specs_means_no_groups() {
        assert!(group_specs(&[]).is_empty());
    }
}
