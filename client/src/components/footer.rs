use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p>"Designed and built with Rust and Leptos."</p>
                <a href="#home" class="footer-top">"Back to top"</a>
            </div>
        </footer>
    }
}
