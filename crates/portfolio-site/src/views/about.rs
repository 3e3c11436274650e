use maud::{html, Markup};
use portfolio_common::model::Profile;
use portfolio_common::motion::Reveal;
use portfolio_common::section::Section;

pub fn about(profile: &Profile) -> Markup {
    let section = Section::About;
    let education = &profile.education;

    html! {
        section id=(section.id()) class="section section-light" data-section=(section.id()) {
            div class="container narrow" data-reveal="fade" style=(Reveal::section().css_vars()) {
                h2 class="section-title" { (section.heading()) }
                div class="two-column" {
                    div class="column" {
                        h3 class="column-title" { "Education" }
                        div class="card" {
                            h4 class="card-title" { (education.degree) }
                            p { (education.specialization) }
                            p { (education.institution) }
                            p class="accent" { (education.period) }
                        }
                    }
                    div class="column" {
                        h3 class="column-title" { "Technical Background" }
                        div class="card" {
                            ul class="bullets" {
                                @for line in profile.background {
                                    li { (line) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
