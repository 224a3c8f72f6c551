use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackButtonProps {
    pub on_click: Callback<MouseEvent>,
    pub aria_label: AttrValue,
}

#[function_component(BackButton)]
pub fn back_button(props: &BackButtonProps) -> Html {
    html! {
        <button
            type="button"
            class="back-button"
            aria-label={props.aria_label.clone()}
            onclick={props.on_click.clone()}
        >
            {"←"}
        </button>
    }
}
