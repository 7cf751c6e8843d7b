use crate::dom;
use crate::error::LandingError;
use crate::toast::{Toast, Toaster};
use leptos::*;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const TOAST_HOST_ID: &str = "toast-host";

/// Render `toaster` into the page. The host element is looked up (or created)
/// the first time a toast appears, never before.
pub fn attach(toaster: &Toaster) {
    let toasts = create_rw_signal(Vec::<Toast>::new());
    let mounted = Cell::new(false);
    let list_toaster = toaster.clone();
    // Subscribers fire from DOM events, outside any reactive owner
    let owner = Owner::current();

    toaster.subscribe(move |snapshot| {
        toasts.set(snapshot.to_vec());
        if mounted.get() || snapshot.is_empty() {
            return;
        }
        mounted.set(true);
        match toast_host() {
            Ok(host) => {
                let toaster = list_toaster.clone();
                let mount = move || {
                    mount_to(host, move || view! { <ToastList toasts=toasts toaster=toaster/> })
                };
                match owner {
                    Some(owner) => with_owner(owner, mount),
                    None => mount(),
                }
            }
            Err(e) => log::warn!("Toasts will not render: {e}"),
        }
    });
}

fn toast_host() -> Result<HtmlElement, LandingError> {
    let document = dom::document().ok_or_else(|| LandingError::Dom("no document".into()))?;
    if let Some(existing) = document.get_element_by_id(TOAST_HOST_ID) {
        return existing
            .dyn_into()
            .map_err(|_| LandingError::Dom(format!("#{TOAST_HOST_ID} is not an HTML element")));
    }

    let host: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| LandingError::Dom("created element is not HTML".into()))?;
    host.set_id(TOAST_HOST_ID);
    host.set_class_name("toast-host");
    host.set_attribute("aria-live", "polite")?;
    document
        .body()
        .ok_or_else(|| LandingError::Dom("no body".into()))?
        .append_child(&host)?;
    Ok(host)
}

#[component]
fn ToastList(toasts: RwSignal<Vec<Toast>>, toaster: Toaster) -> impl IntoView {
    view! {
        <For
            each=move || toasts.get()
            key=|toast| toast.id()
            children=move |toast| {
                let id = toast.id();
                let toaster = toaster.clone();
                // Keyed rows are not re-rendered on phase changes, so read the class live
                let class = move || {
                    toasts.with(|all| {
                        all.iter()
                            .find(|t| t.id() == id)
                            .map(Toast::class_name)
                            .unwrap_or_default()
                    })
                };
                view! {
                    <div class=class role="status" on:click=move |_| {
                        toaster.dismiss(id);
                    }>
                        {toast.message().to_string()}
                    </div>
                }
            }
        />
    }
}
