use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub id: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct TabListProps {
    pub tabs: Vec<TabItem>,
    pub active: AttrValue,
    pub on_select: Callback<AttrValue>,
}

#[function_component(TabList)]
pub fn tab_list(props: &TabListProps) -> Html {
    html! {
        <div class="tabs-list" role="tablist">
            {for props.tabs.iter().map(|tab| {
                let selected = tab.id == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = tab.id.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                };
                html! {
                    <button
                        key={tab.id.to_string()}
                        type="button"
                        role="tab"
                        aria-selected={selected.to_string()}
                        class={classes!("tabs-trigger", selected.then_some("tabs-trigger-active"))}
                        {onclick}
                    >
                        {tab.label.clone()}
                    </button>
                }
            })}
        </div>
    }
}
