//! Landing section with the particle backdrop.

use leptos::prelude::*;

use crate::components::particle_field::ParticleField;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <ParticleField/>
            <div class="hero-content container">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-title">"Alex Morgan"</h1>
                <p class="hero-subtitle">"Full-stack developer building fast, accessible web and mobile products."</p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"View Work"</a>
                    <a href="#contact" class="btn btn-outline">"Get in Touch"</a>
                </div>
            </div>
        </section>
    }
}
