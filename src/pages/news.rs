use yew::prelude::*;

use crate::content::use_site_content;

#[function_component(NewsSection)]
pub fn news_section() -> Html {
    let content = use_site_content();
    let news = &content.news;

    html! {
        <section id="news" class="page-section">
            <div class="page-section__container">
                <h2 class="page-section__title">{&news.title}</h2>
                <ul class="page-section__news">
                    { for news.items.iter().map(|item| html! {
                        <li key={item.title.clone()} class="page-section__news-item">
                            <time datetime={item.date.to_string()} class="page-section__news-date">
                                {item.display_date()}
                            </time>
                            <span class="page-section__news-title">{&item.title}</span>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
