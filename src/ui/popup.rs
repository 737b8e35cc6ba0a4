/// Popup UI for URL Sentinel

use std::cell::RefCell;
use std::rc::Rc;

use patternfly_yew::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::BridgeError;
use crate::messages::{DomainCheckResult, DomainCountResponse, DomainListResponse, Request};
use crate::ui::components::{DomainList, ResultBox, StatusRow};
use crate::ui::state::{
    ActiveTab, CountDisplay, DomainListView, PageInfo, PanelAction, RESULT_DISMISS_MS,
    ResultContent, ResultPanel, ResultPanels,
};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn sendRequest(request: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;
}

const CHECK_LABEL: &str = "🔍 Check Current Page";
const CHECKING_LABEL: &str = "🔄 Checking...";

/// Clears the busy flag on every exit path of a check
struct BusyGuard(UseStateHandle<bool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let domain_count = use_state(|| CountDisplay::Loading);
    let page = use_state(|| PageInfo::Loading);
    let checking = use_state(|| false);
    let panels = use_reducer(ResultPanels::default);
    let next_panel_id = use_mut_ref(|| 0u32);
    let domain_list = use_state(|| DomainListView::Hidden);

    // Load count and current page on mount
    {
        let domain_count = domain_count.clone();
        let page = page.clone();

        use_effect_with((), move |_| {
            log::info!("Popup opened");

            spawn_local(async move {
                match query::<DomainCountResponse>(&Request::GetDomainCount).await {
                    Ok(response) => {
                        log::info!("Monitoring {} malicious domains", response.count);
                        domain_count.set(CountDisplay::Known(response.count));
                    }
                    Err(e) => {
                        log::error!("Error loading domain count: {}", e);
                        domain_count.set(CountDisplay::Unknown);
                    }
                }

                match load_active_tab().await {
                    Ok(tab) => {
                        let info = PageInfo::from_tab(Some(tab));
                        log::info!("Current page: {}", info.label());
                        page.set(info);
                    }
                    Err(e) => {
                        log::error!("Error loading current page: {}", e);
                        page.set(PageInfo::Unavailable);
                    }
                }
            });
            || ()
        });
    }

    // Check current page handler
    let on_check = {
        let page = page.clone();
        let checking = checking.clone();
        let panels = panels.clone();
        let next_panel_id = next_panel_id.clone();

        Callback::from(move |_| {
            if *checking {
                return;
            }

            let url = page.url().map(str::to_string);
            let panels = panels.clone();
            let next_panel_id = next_panel_id.clone();

            checking.set(true);
            let busy = BusyGuard(checking.clone());

            spawn_local(async move {
                let _busy = busy;

                let content = match url {
                    Some(url) => {
                        log::info!("Checking current page...");
                        match query::<DomainCheckResult>(&Request::CheckUrl { url }).await {
                            Ok(result) => ResultContent::from_check(&result),
                            Err(e) => {
                                log::error!("Error checking URL: {}", e);
                                ResultContent::error()
                            }
                        }
                    }
                    None => {
                        log::error!("Error checking URL: current page is unavailable");
                        ResultContent::error()
                    }
                };

                show_result(&panels, &next_panel_id, content);
            });
        })
    };

    // View monitored list handler
    let on_view_list = {
        let domain_list = domain_list.clone();

        Callback::from(move |_| {
            // If already showing, just collapse
            if matches!(*domain_list, DomainListView::Shown(_)) {
                domain_list.set(DomainListView::Hidden);
                return;
            }

            let domain_list = domain_list.clone();
            domain_list.set(DomainListView::Loading);

            spawn_local(async move {
                match query::<DomainListResponse>(&Request::GetDomainList).await {
                    Ok(response) => domain_list.set(DomainListView::Shown(response.domains)),
                    Err(e) => {
                        log::error!("Error loading domain list: {}", e);
                        domain_list.set(DomainListView::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    let check_label = if *checking { CHECKING_LABEL } else { CHECK_LABEL };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"🛡️ URL Sentinel"}</h1>

            <StatusRow label="Monitored domains:" value={domain_count.label()} />
            <div id="currentPageInfo">
                <StatusRow
                    label="Current page:"
                    value={page.label().to_string()}
                    value_class={classes!("current-url")}
                />
            </div>

            {for panels.panels.iter().map(|panel| html! {
                <ResultBox key={panel.id} content={panel.content.clone()} />
            })}

            <div class="flex-column-gap">
                <Button onclick={on_check} disabled={*checking} variant={ButtonVariant::Primary} block={true}>
                    {check_label}
                </Button>
                <Button onclick={on_view_list} variant={ButtonVariant::Secondary} block={true}>
                    {"📋 View Malicious List"}
                </Button>
            </div>

            {match &*domain_list {
                DomainListView::Hidden => html! {},
                DomainListView::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                DomainListView::Shown(domains) => html! {
                    <DomainList domains={domains.clone()} />
                },
                DomainListView::Failed(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
            }}

            <p class="footer-popup">
                {"URL Sentinel v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

/// Send a request to the background context and decode the reply
async fn query<T: DeserializeOwned>(request: &Request) -> Result<T, BridgeError> {
    let request_js = request.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

    let response = sendRequest(request_js)
        .await
        .map_err(|e| BridgeError::Messaging(format!("{:?}", e)))?;

    if response.is_undefined() || response.is_null() {
        return Err(BridgeError::Messaging("no response".to_string()));
    }

    Ok(serde_wasm_bindgen::from_value(response)?)
}

async fn load_active_tab() -> Result<ActiveTab, BridgeError> {
    let tab_js = getActiveTab()
        .await
        .map_err(|e| BridgeError::TabQuery(format!("{:?}", e)))?;

    if tab_js.is_null() || tab_js.is_undefined() {
        return Err(BridgeError::NoActiveTab);
    }

    Ok(serde_wasm_bindgen::from_value(tab_js)?)
}

/// Display a result panel and schedule its removal
fn show_result(
    panels: &UseReducerHandle<ResultPanels>,
    next_panel_id: &Rc<RefCell<u32>>,
    content: ResultContent,
) {
    let id = {
        let mut next = next_panel_id.borrow_mut();
        *next += 1;
        *next
    };

    panels.dispatch(PanelAction::Show(ResultPanel { id, content }));

    let panels = panels.clone();
    let dismiss: js_sys::Function = Closure::once_into_js(move || {
        panels.dispatch(PanelAction::Dismiss(id));
    })
    .unchecked_into();

    let scheduled = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &dismiss,
                RESULT_DISMISS_MS as i32,
            )
        });

    if let Err(e) = scheduled {
        log::error!("Could not schedule result dismissal: {:?}", e);
    }
}
