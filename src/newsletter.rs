use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::SUBSCRIBED_NOTICE_MS;
use crate::error::SubscribeError;

/// Trims and sanity-checks an email address. This is a typo catcher, not RFC 5322.
pub fn validate_email(input: &str) -> Result<String, SubscribeError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(SubscribeError::EmptyEmail);
    }
    let invalid = || SubscribeError::InvalidEmail(email.to_string());
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || email.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    let (name, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if name.is_empty() || tld.is_empty() {
        return Err(invalid());
    }
    Ok(email.to_string())
}

/// Keeps only the domain so addresses never reach the console.
fn redact(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((_, domain)) => format!("***@{}", domain),
        None => "***".to_string(),
    }
}

/// Mailing-list intake. There is no list service behind the site yet, so a
/// valid address is accepted locally.
pub fn submit(email: &str) -> Result<(), SubscribeError> {
    let email = validate_email(email)?;
    info!("newsletter signup from {}", redact(&email));
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::from("Subscribe"))]
    pub button_label: AttrValue,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let email = use_state(String::new);
    let subscribed = use_state(|| false);
    let error = use_state(|| None::<String>);
    // Dropped on unmount, which cancels a pending reset.
    let notice_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let subscribed = subscribed.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit(&email) {
                Ok(()) => {
                    subscribed.set(true);
                    email.set(String::new());
                    let subscribed = subscribed.clone();
                    *notice_timer.borrow_mut() = Some(Timeout::new(SUBSCRIBED_NOTICE_MS, move || {
                        subscribed.set(false);
                    }));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <form class={classes!("newsletter", props.class.clone())} {onsubmit} novalidate=true>
            <input
                type="email"
                class="newsletter__input"
                placeholder="Enter your email"
                aria-label="Email address"
                value={(*email).clone()}
                {oninput}
            />
            <button type="submit" class="newsletter__button">
                { if *subscribed { "Subscribed ✓".into() } else { props.button_label.clone() } }
            </button>
            {
                if let Some(msg) = (*error).as_ref() {
                    html! { <p class="newsletter__error" role="alert">{msg}</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_plain_addresses() {
        assert_eq!(validate_email("  pilot@flyhive.in "), Ok("pilot@flyhive.in".to_string()));
        assert_eq!(validate_email("a.b+c@sub.example.co"), Ok("a.b+c@sub.example.co".to_string()));
    }

    #[test]
    fn empty_input_is_its_own_error() {
        assert_eq!(validate_email("   "), Err(SubscribeError::EmptyEmail));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["pilot", "@flyhive.in", "pilot@", "pilot@flyhive", "a@b@c.com", "pi lot@x.io", "pilot@.in", "pilot@x."] {
            assert!(
                matches!(validate_email(bad), Err(SubscribeError::InvalidEmail(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn logged_signups_hide_the_address() {
        let line = redact("pilot.jane@flyhive.in");
        assert_eq!(line, "***@flyhive.in");
        assert!(!line.contains("pilot.jane"));
        assert_eq!(redact("nonsense"), "***");
    }

    #[test]
    fn submit_reports_validation_errors() {
        assert!(submit("pilot@flyhive.in").is_ok());
        assert_eq!(
            submit("nope").unwrap_err().to_string(),
            "\"nope\" doesn't look like an email address"
        );
    }
}
