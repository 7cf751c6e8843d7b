use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero">
            <h1>"Carry less. Pay less."</h1>
            <p class="tagline">
                "The Drift daypack: 18 liters, 640 grams, and a price you're welcome to argue with."
            </p>
            <div class="hero-actions">
                <a href="#store" class="btn btn--brand">"Shop now"</a>
                <a href="#features" class="btn btn--ghost">"See why"</a>
            </div>
            <p class="hint">"Press " <kbd>"S"</kbd> " to jump to the store."</p>
        </section>
    }
}
