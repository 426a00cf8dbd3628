use yew::prelude::*;

use crate::content::use_site_content;

#[function_component(Careers)]
fn careers() -> Html {
    let content = use_site_content();
    let careers = &content.careers;

    html! {
        <div id="careers" class="page-section__careers">
            <h3 class="page-section__subtitle">{&careers.title}</h3>
            <p>{&careers.body}</p>
            <blockquote class="page-section__quote">{&careers.quote}</blockquote>
        </div>
    }
}

#[function_component(CompanySection)]
pub fn company_section() -> Html {
    let content = use_site_content();
    let company = &content.company;

    html! {
        <section id="company" class="page-section">
            <div class="page-section__container">
                <h2 class="page-section__title">{&company.title}</h2>
                <p class="page-section__lead">{&company.intro}</p>
                <blockquote class="page-section__quote">{&company.quote}</blockquote>
                <p>{&company.team}</p>
                <Careers />
            </div>
        </section>
    }
}
