//! Hero title typing animation: the text appears one character at a time
//! with a caret that lingers briefly after the last keystroke.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// First `shown` characters of the text, respecting char boundaries.
pub fn typed_prefix(text: &str, shown: usize) -> String {
    text.chars().take(shown).collect()
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let started = use_state(|| false);
    let shown = use_state(|| 0usize);
    let caret = use_state(|| true);
    let total = props.text.chars().count();

    {
        let started = started.clone();
        let shown = shown.clone();
        let caret = caret.clone();
        let deps = (*started, *shown, *caret);
        use_effect_with_deps(
            move |&(has_started, visible, caret_on)| {
                if !has_started {
                    let started = started.clone();
                    Timeout::new(config::TYPE_START_DELAY_MS, move || started.set(true)).forget();
                } else if visible < total {
                    let shown = shown.clone();
                    Timeout::new(config::TYPE_SPEED_MS, move || shown.set(visible + 1)).forget();
                } else if caret_on {
                    let caret = caret.clone();
                    Timeout::new(config::TYPE_CARET_LINGER_MS, move || caret.set(false)).forget();
                }
                || ()
            },
            deps,
        );
    }

    let caret_style = if *caret {
        "border-right: 3px solid #3b82f6;"
    } else {
        "border-right: none;"
    };

    html! {
        <h1 class={classes!("hero-title", props.class.clone())} style={caret_style}>
            { typed_prefix(&props.text, *shown) }
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::typed_prefix;

    #[test]
    fn prefix_grows_with_tick_count_and_clamps() {
        let text = "ACE";
        assert_eq!(typed_prefix(text, 0), "");
        assert_eq!(typed_prefix(text, 1), "A");
        assert_eq!(typed_prefix(text, 2), "AC");
        assert_eq!(typed_prefix(text, 3), "ACE");
        assert_eq!(typed_prefix(text, 99), "ACE");
    }

    #[test]
    fn prefix_respects_multibyte_boundaries() {
        let text = "Café ACE";
        assert_eq!(typed_prefix(text, 4), "Café");
        assert_eq!(typed_prefix(text, 5), "Café ");
    }
}
