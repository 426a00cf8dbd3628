use chrono::Datelike;
use yew::prelude::*;

use crate::content::use_site_content;
use crate::newsletter::NewsletterForm;

fn social_icon(name: &str) -> Html {
    let path = match name {
        "Twitter" => "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z",
        "LinkedIn" => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433a2.064 2.064 0 110-4.128 2.064 2.064 0 010 4.128zm1.782 13.019H3.555V9h3.564v11.452z",
        "Instagram" => "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849s-.012 3.584-.069 4.849c-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07s-3.584-.012-4.849-.07c-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849s.013-3.583.07-4.849C2.381 3.924 3.896 2.38 7.151 2.232 8.417 2.175 8.796 2.163 12 2.163zM12 5.838a6.162 6.162 0 100 12.324 6.162 6.162 0 000-12.324zM12 16a4 4 0 110-8 4 4 0 010 8z",
        "YouTube" => "M23.498 6.186a3.016 3.016 0 00-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 00.502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 002.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 002.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z",
        _ => "M12 2a10 10 0 100 20 10 10 0 000-20z",
    };
    html! {
        <svg viewBox="0 0 24 24" fill="currentColor"><path d={path} /></svg>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = use_site_content();
    let footer = &content.footer;
    let hovered = use_state(|| None::<String>);
    let current_year = chrono::Local::now().year();

    let hover = |name: Option<String>| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(name.clone()))
    };

    html! {
        <footer class="footer">
            <style>
                {r#"
                .footer {
                    position: relative;
                    background: #050505;
                    color: rgba(255, 255, 255, 0.75);
                    padding: 5rem 0 2rem;
                    overflow: hidden;
                }
                .footer__container { max-width: 1400px; margin: 0 auto; padding: 0 2rem; }
                .footer__main .footer__container {
                    display: grid;
                    grid-template-columns: 1.2fr 2fr;
                    gap: 4rem;
                }
                .footer__logo { display: inline-flex; align-items: center; gap: 0.75rem; color: #fff; text-decoration: none; }
                .footer__logo-icon { width: 32px; height: 32px; }
                .footer__logo-text { font-weight: 800; letter-spacing: 0.2em; }
                .footer__tagline { color: #fff; margin-top: 1.25rem; }
                .footer__social { display: flex; gap: 0.75rem; margin-top: 1.5rem; }
                .footer__social-link { position: relative; width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; border: 1px solid rgba(255,255,255,0.15); border-radius: 50%; color: #fff; }
                .footer__social-icon svg { width: 18px; height: 18px; }
                .footer__social-tooltip { position: absolute; bottom: 120%; font-size: 0.75rem; opacity: 0; transition: opacity 0.2s ease; white-space: nowrap; }
                .footer__social-tooltip.visible { opacity: 1; }
                .footer__links { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                .footer__column-title { color: #fff; margin: 0 0 1rem; }
                .footer__list { list-style: none; padding: 0; margin: 0; }
                .footer__item { margin-bottom: 0.6rem; }
                .footer__link { color: inherit; text-decoration: none; display: inline-flex; gap: 0.5rem; align-items: center; }
                .footer__link:hover { color: #fff; }
                .footer__badge { background: #CC0000; color: #fff; font-size: 0.65rem; padding: 0.1rem 0.45rem; border-radius: 999px; }
                .footer__newsletter { margin-top: 3rem; }
                .footer__partners { margin-top: 4rem; border-top: 1px solid rgba(255,255,255,0.08); padding-top: 2rem; }
                .footer__partners-label { text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.75rem; }
                .footer__partners-grid { display: flex; flex-wrap: wrap; gap: 2.5rem; margin-top: 1rem; }
                .footer__partner { color: rgba(255,255,255,0.5); text-decoration: none; font-weight: 700; letter-spacing: 0.15em; display: inline-flex; gap: 0.4rem; align-items: center; }
                .footer__partner:hover { color: #fff; }
                .footer__partner-hover svg { width: 14px; height: 14px; }
                .footer__bottom { margin-top: 2rem; font-size: 0.8rem; }
                .newsletter { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                .newsletter__input { flex: 1; min-width: 200px; padding: 0.75rem 1rem; border-radius: 8px; border: 1px solid rgba(255,255,255,0.2); background: transparent; color: #fff; }
                .newsletter__button { padding: 0.75rem 1.25rem; border-radius: 8px; border: none; background: #CC0000; color: #fff; cursor: pointer; }
                .newsletter__error { width: 100%; color: #ff6b6b; font-size: 0.85rem; margin: 0.25rem 0 0; }
                @media (max-width: 768px) {
                    .footer__main .footer__container { grid-template-columns: 1fr; }
                    .footer__links { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <div class="footer__main">
                <div class="footer__container">
                    <div class="footer__brand">
                        <a href="/" class="footer__logo">
                            <div class="footer__logo-icon">
                                <svg viewBox="0 0 24 24" fill="none">
                                    <path d="M12 2L2 7L12 12L22 7L12 2Z" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
                                    <path d="M2 17L12 22L22 17" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
                                    <path d="M2 12L12 17L22 12" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
                                </svg>
                            </div>
                            <span class="footer__logo-text">{&footer.brand}</span>
                        </a>
                        <p class="footer__tagline">{&footer.tagline}</p>
                        <p class="footer__description">{&footer.description}</p>

                        <div class="footer__social">
                            { for footer.socials.iter().map(|social| html! {
                                <a
                                    key={social.name.clone()}
                                    href={social.href.clone()}
                                    class="footer__social-link"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.name.clone()}
                                    onmouseenter={hover(Some(social.name.clone()))}
                                    onmouseleave={hover(None)}
                                >
                                    <span class="footer__social-icon">{social_icon(&social.name)}</span>
                                    <span class={classes!(
                                        "footer__social-tooltip",
                                        (hovered.as_deref() == Some(social.name.as_str())).then(|| "visible")
                                    )}>
                                        {&social.name}
                                    </span>
                                </a>
                            }) }
                        </div>

                        <div class="footer__newsletter">
                            <p>{"Stay updated on our progress"}</p>
                            <NewsletterForm />
                        </div>
                    </div>

                    <div class="footer__links">
                        { for footer.columns.iter().map(|column| html! {
                            <div key={column.title.clone()} class="footer__column">
                                <h4 class="footer__column-title">{&column.title}</h4>
                                <ul class="footer__list">
                                    { for column.links.iter().map(|link| html! {
                                        <li class="footer__item">
                                            <a href={link.href.clone()} class="footer__link">
                                                <span>{&link.name}</span>
                                                {
                                                    match &link.badge {
                                                        Some(badge) => html! { <span class="footer__badge">{badge}</span> },
                                                        None => html! {},
                                                    }
                                                }
                                            </a>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="footer__partners">
                <div class="footer__container">
                    <p class="footer__partners-label">{"Inspired by Industry Leaders"}</p>
                    <div class="footer__partners-grid">
                        { for footer.partners.iter().enumerate().map(|(index, partner)| html! {
                            <a
                                key={partner.name.clone()}
                                href={partner.href.clone()}
                                class="footer__partner"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={partner.name.clone()}
                                style={format!("--index: {};", index)}
                            >
                                <span class="footer__partner-logo">{&partner.logo}</span>
                                <span class="footer__partner-hover">
                                    <svg viewBox="0 0 24 24" fill="none">
                                        <path d="M7 17L17 7M17 7H7M17 7V17" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                                    </svg>
                                </span>
                            </a>
                        }) }
                    </div>
                    <p class="footer__bottom">
                        {format!("© {} {}. All rights reserved.", current_year, footer.brand)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
