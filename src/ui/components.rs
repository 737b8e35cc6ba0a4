/// Reusable UI components

use yew::prelude::*;

use crate::ui::state::ResultContent;

#[derive(Properties, PartialEq)]
pub struct StatusRowProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub value_class: Classes,
}

#[function_component(StatusRow)]
pub fn status_row(props: &StatusRowProps) -> Html {
    html! {
        <div class="status-box">
            <span class="status-label">{&props.label}</span>
            <span class={props.value_class.clone()}>{&props.value}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultBoxProps {
    pub content: ResultContent,
}

#[function_component(ResultBox)]
pub fn result_box(props: &ResultBoxProps) -> Html {
    let content = &props.content;

    html! {
        <div class={classes!("status-box", content.kind.class())}>
            <strong>{&content.title}</strong>
            <p>{&content.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DomainListProps {
    pub domains: Vec<String>,
}

#[function_component(DomainList)]
pub fn domain_list(props: &DomainListProps) -> Html {
    html! {
        <div class="status-box">
            <strong>{"🛡️ Monitored Malicious Domains"}</strong>
            if props.domains.is_empty() {
                <p>{"No domains are being monitored."}</p>
            } else {
                <ul class="domain-list">
                    {for props.domains.iter().map(|domain| html! {
                        <li key={domain.clone()}>{domain}</li>
                    })}
                </ul>
            }
            <p class="domain-list-note">
                {"This is the local database only."}
            </p>
        </div>
    }
}
