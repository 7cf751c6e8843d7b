use leptos::*;

/// The product card with both call-to-action buttons. Clicks are not bound
/// here: the app shell handles every `data-action` element through a single
/// delegated listener.
#[component]
pub fn StoreSection(badge: ReadSignal<String>) -> impl IntoView {
    view! {
        <section id="store" class="store reveal">
            <h2>"The store"</h2>
            <article class="card product" data-tilt="">
                <h3>"Drift 18L daypack"</h3>
                <p class="price">
                    <span class="price-now">"$89"</span>
                    <span class="price-was">"$119"</span>
                </p>
                <p>"Slate grey, lifetime warranty, free returns for 60 days."</p>
                <div class="product-actions">
                    <button type="button" class="btn btn--brand" data-action="bargain">
                        "Bargain"
                    </button>
                    <span class="badge" aria-live="polite">{move || badge.get()}</span>
                    <button type="button" class="btn btn--ghost" data-action="buy">
                        "Buy now"
                    </button>
                </div>
            </article>
        </section>
    }
}
