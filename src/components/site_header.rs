use leptos::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <a href="#top" class="brand">"Drift"</a>
                <nav class="nav-links" aria-label="Sections">
                    <a href="#features" class="nav-link">"Why Drift"</a>
                    <a href="#store" class="nav-link">"Store"</a>
                </nav>
            </div>
        </header>
    }
}
