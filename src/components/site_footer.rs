use leptos::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>
                "© " <span id="year"></span> " Drift Goods · "
                <a href="#top">"Back to top"</a>
            </p>
            <p class="analytics-note">
                "Analytics by "
                <a href="https://umami.is" target="_blank" rel="noopener">"Umami"</a>
                " · No cookies · No personal data"
            </p>
        </footer>
    }
}
