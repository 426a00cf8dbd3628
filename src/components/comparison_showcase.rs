use std::cell::RefCell;
use std::rc::Rc;

use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::COMPARISON_INTERVAL_MS;
use crate::content::ComparisonSlide;
use crate::dom;
use crate::sensors::viewport::Viewport;
use crate::widgets::carousel::{use_carousel, CarouselAction};
use crate::widgets::comparison_slider::ComparisonSlider;
use crate::widgets::swipe::{Swipe, SwipeTracker};

#[derive(Properties, PartialEq)]
pub struct ComparisonShowcaseProps {
    pub slides: Vec<ComparisonSlide>,
    pub viewport: Viewport,
}

/// Before/after slider inside an auto-rotating carousel.
#[function_component(ComparisonShowcase)]
pub fn comparison_showcase(props: &ComparisonShowcaseProps) -> Html {
    let ComparisonShowcaseProps { slides, viewport } = props;
    let carousel = use_carousel(slides.len(), COMPARISON_INTERVAL_MS, !viewport.reduced_motion);
    let swipe: Rc<RefCell<SwipeTracker>> = use_mut_ref(SwipeTracker::default);

    {
        let dispatcher = carousel.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if dom::targets_text_entry(&e) {
                return;
            }
            let now = dom::now_ms();
            match e.key().as_str() {
                "ArrowLeft" => dispatcher.dispatch(CarouselAction::Prev { now }),
                "ArrowRight" => dispatcher.dispatch(CarouselAction::Next { now }),
                _ => {}
            }
        });
    }

    let hover = !viewport.touch_primary;
    let onmouseenter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if hover {
                carousel.dispatch(CarouselAction::HoverPause);
            }
        })
    };
    let onmouseleave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if hover {
                carousel.dispatch(CarouselAction::HoverResume { now: dom::now_ms() });
            }
        })
    };

    let onfocusin = {
        let carousel = carousel.clone();
        Callback::from(move |_: FocusEvent| carousel.dispatch(CarouselAction::FocusPause))
    };
    let onfocusout = {
        let carousel = carousel.clone();
        Callback::from(move |e: FocusEvent| {
            if dom::focus_left(&e) {
                carousel.dispatch(CarouselAction::FocusResume { now: dom::now_ms() });
            }
        })
    };

    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| match e.touches().get(0) {
            Some(t) => swipe.borrow_mut().begin(t.client_x() as f64),
            None => swipe.borrow_mut().cancel(),
        })
    };
    let ontouchend = {
        let swipe = swipe.clone();
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(t) = e.changed_touches().get(0) else {
                swipe.borrow_mut().cancel();
                return;
            };
            let now = dom::now_ms();
            match swipe.borrow_mut().finish(t.client_x() as f64) {
                Some(Swipe::Left) => carousel.dispatch(CarouselAction::Next { now }),
                Some(Swipe::Right) => carousel.dispatch(CarouselAction::Prev { now }),
                None => {}
            }
        })
    };

    let on_drag = {
        let carousel = carousel.clone();
        Callback::from(move |dragging: bool| {
            if dragging {
                carousel.dispatch(CarouselAction::Hold);
            } else {
                carousel.dispatch(CarouselAction::Unhold { now: dom::now_ms() });
            }
        })
    };

    let step = |action: fn(f64) -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action(dom::now_ms())))
    };
    let go_to = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::GoTo { index, now: dom::now_ms() })
        })
    };

    let Some(slide) = slides.get(carousel.index) else {
        return html! {};
    };

    html! {
        <div
            class={classes!("compare-showcase", carousel.is_paused().then(|| "compare-showcase--paused"))}
            {onmouseenter}
            {onmouseleave}
            {onfocusin}
            {onfocusout}
            {ontouchstart}
            {ontouchend}
            aria-roledescription="carousel"
        >
            <style>
                {r#"
                .compare-showcase {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .compare-showcase__header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 1.5rem;
                    gap: 1rem;
                }
                .compare-showcase__title { font-size: 2rem; margin: 0 0 0.5rem; }
                .compare-showcase__caption { color: rgba(255, 255, 255, 0.7); margin: 0; }
                .compare-showcase__arrows { display: flex; gap: 0.5rem; }
                .compare-showcase__arrow {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: none;
                    color: #fff;
                    cursor: pointer;
                }
                .compare-showcase__dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                    margin-top: 1.25rem;
                }
                .compare-showcase__dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .compare-showcase__dot--active { background: #CC0000; }
                "#}
            </style>
            <div class="compare-showcase__header">
                <div>
                    <h2 class="compare-showcase__title">{&slide.title}</h2>
                    <p class="compare-showcase__caption">{&slide.caption}</p>
                </div>
                <div class="compare-showcase__arrows">
                    <button
                        class="compare-showcase__arrow"
                        aria-label="Previous comparison"
                        onclick={step(|now| CarouselAction::Prev { now })}
                    >
                        {"←"}
                    </button>
                    <button
                        class="compare-showcase__arrow"
                        aria-label="Next comparison"
                        onclick={step(|now| CarouselAction::Next { now })}
                    >
                        {"→"}
                    </button>
                </div>
            </div>
            <ComparisonSlider
                before={slide.before.clone()}
                after={slide.after.clone()}
                {on_drag}
            />
            <div class="compare-showcase__dots" role="tablist">
                { for slides.iter().enumerate().map(|(index, s)| html! {
                    <button
                        key={s.id.clone()}
                        class={classes!("compare-showcase__dot", (index == carousel.index).then(|| "compare-showcase__dot--active"))}
                        role="tab"
                        aria-selected={(index == carousel.index).to_string()}
                        aria-label={format!("Show {}", s.title)}
                        onclick={go_to(index)}
                    />
                }) }
            </div>
        </div>
    }
}
