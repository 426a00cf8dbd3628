use yew::prelude::*;

use crate::content::use_site_content;

#[function_component(MasterplanSection)]
pub fn masterplan_section() -> Html {
    let content = use_site_content();
    let masterplan = &content.masterplan;

    html! {
        <section id="masterplan" class="page-section">
            <div class="page-section__container">
                <h2 class="page-section__title">{&masterplan.title}</h2>
                <ol class="page-section__phases">
                    { for masterplan.phases.iter().enumerate().map(|(index, phase)| html! {
                        <li key={index} class="page-section__phase">
                            <span class="page-section__phase-number">{format!("{:02}", index + 1)}</span>
                            <span>{phase}</span>
                        </li>
                    }) }
                </ol>
                <blockquote class="page-section__quote">{&masterplan.quote}</blockquote>
            </div>
        </section>
    }
}
