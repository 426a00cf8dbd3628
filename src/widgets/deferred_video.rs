use log::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeferredVideoProps {
    pub src: AttrValue,
    pub poster: AttrValue,
    /// The source is only attached, and so only downloaded, once this is true.
    pub load: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Browsers may refuse to autoplay. That is fine: the poster stays up.
fn try_play(video: &HtmlVideoElement) {
    video.set_muted(true);
    video.load();
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!("autoplay rejected: {:?}", e);
            }
        }),
        Err(e) => debug!("autoplay unavailable: {:?}", e),
    }
}

#[function_component(DeferredVideo)]
pub fn deferred_video(props: &DeferredVideoProps) -> Html {
    let video = use_node_ref();

    {
        let video = video.clone();
        use_effect_with_deps(
            move |load| {
                if *load {
                    if let Some(el) = video.cast::<HtmlVideoElement>() {
                        try_play(&el);
                    }
                }
                || ()
            },
            props.load,
        );
    }

    html! {
        <video
            ref={video}
            class={props.class.clone()}
            autoplay=true
            muted=true
            loop=true
            playsinline=true
            preload="none"
            poster={props.poster.clone()}
            aria-hidden="true"
        >
            {
                if props.load {
                    html! { <source src={props.src.clone()} type="video/mp4" /> }
                } else {
                    html! {}
                }
            }
        </video>
    }
}
