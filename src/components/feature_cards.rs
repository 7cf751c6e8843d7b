use leptos::*;

const FEATURES: [(&str, &str); 3] = [
    (
        "Featherweight",
        "Ripstop shell and a frameless back panel keep the whole pack under 650 grams.",
    ),
    (
        "Weatherproof",
        "Roll-top closure and taped seams shrug off a downpour on the walk home.",
    ),
    (
        "Fits a laptop",
        "A padded sleeve holds up to a 16-inch laptop without eating into the main space.",
    ),
];

#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <h2 class="reveal">"Why Drift"</h2>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(title, body)| view! {
                        <article class="card" data-tilt="">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
