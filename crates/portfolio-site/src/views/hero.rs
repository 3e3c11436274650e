use maud::{html, Markup};
use portfolio_common::model::Profile;
use portfolio_common::motion::Reveal;
use portfolio_common::particles::DriftField;
use portfolio_common::section::Section;

pub fn hero(profile: &Profile, particles: &DriftField) -> Markup {
    let first_role = profile.roles.first().copied().unwrap_or_default();
    let section = Section::Hero;

    html! {
        section id=(section.id()) class="section section-hero" data-section=(section.id()) {
            div class="hero-backdrop" aria-hidden="true" {
                div class="hero-gradient" {}
                div class="hero-glow" data-hero-glow="" {}
                @for particle in &particles.particles {
                    span class="drift" style=(particle.css_vars()) {}
                }
            }
            div class="container hero-content" data-reveal="rise" style=(Reveal::rise(0, 0.0).css_vars()) {
                h1 class="hero-name" { (profile.name) }
                h2 class="hero-headline" { (profile.headline) }
                p class="hero-roles" {
                    span class="typewriter" data-typewriter="" { (first_role) }
                    span class="caret" aria-hidden="true" { "|" }
                }
                p class="hero-summary" { (profile.summary) }
                a class="cta" href={ "#" (Section::Contact.id()) } { "Get in Touch" }
            }
        }
    }
}
