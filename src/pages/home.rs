use log::info;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::{Header, Section};
use crate::pages::company::CompanySection;
use crate::pages::hero::Hero;
use crate::pages::masterplan::MasterplanSection;
use crate::pages::news::NewsSection;
use crate::pages::product::ProductSection;
use crate::sensors::viewport::use_viewport;

/// Page root. Owns the active section; the header only reports clicks.
#[function_component(Home)]
pub fn home() -> Html {
    let active = use_state_eq(|| Section::Hero);
    let viewport = use_viewport();

    let on_nav = {
        let active = active.clone();
        Callback::from(move |section: Section| {
            if *active != section {
                info!("Showing section {}", section.id());
            }
            active.set(section);
        })
    };

    html! {
        <div class="app">
            <style>
                {r#"
                body { margin: 0; background: #0a0a0a; font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif; }
                .page-section { background: #0a0a0a; color: rgba(255,255,255,0.8); padding: 8rem 0; }
                .page-section__container { max-width: 960px; margin: 0 auto; padding: 0 2rem; }
                .page-section__title { color: #fff; font-size: clamp(2rem, 4vw, 3.2rem); margin: 0 0 2rem; }
                .page-section__subtitle { color: #fff; font-size: 1.6rem; margin: 4rem 0 1rem; }
                .page-section__lead { font-size: 1.25rem; line-height: 1.6; }
                .page-section__quote { border-left: 3px solid #CC0000; margin: 2rem 0; padding-left: 1.5rem; font-style: italic; color: #fff; }
                .page-section__phases, .page-section__news { list-style: none; padding: 0; margin: 0; }
                .page-section__phase { display: flex; gap: 1.5rem; align-items: baseline; padding: 1.25rem 0; border-bottom: 1px solid rgba(255,255,255,0.08); }
                .page-section__phase-number { color: #CC0000; font-weight: 700; }
                .page-section__news-item { display: flex; flex-direction: column; gap: 0.4rem; padding: 1.5rem 0; border-bottom: 1px solid rgba(255,255,255,0.08); }
                .page-section__news-date { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.15em; opacity: 0.6; }
                .page-section__news-title { color: #fff; font-size: 1.2rem; }
                "#}
            </style>
            <Header active={*active} {on_nav} />
            <main>
                <Hero {viewport} />
                {
                    match *active {
                        Section::Hero => html! { <ProductSection {viewport} /> },
                        Section::Company => html! { <CompanySection /> },
                        Section::Masterplan => html! { <MasterplanSection /> },
                        Section::News => html! { <NewsSection /> },
                    }
                }
            </main>
            <Footer />
        </div>
    }
}
