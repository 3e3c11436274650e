use maud::{html, Markup};
use portfolio_common::model::SkillCategory;
use portfolio_common::motion::Reveal;
use portfolio_common::section::Section;

pub fn skills(categories: &[SkillCategory]) -> Markup {
    let section = Section::Skills;

    html! {
        section id=(section.id()) class="section section-dark" data-section=(section.id()) {
            div class="container wide" data-reveal="fade" style=(Reveal::section().css_vars()) {
                h2 class="section-title" { (section.heading()) }
                div class="skill-grid" {
                    @for (index, category) in categories.iter().enumerate() {
                        div class="skill-card" data-reveal="rise" style=(Reveal::rise(index, 0.1).css_vars()) {
                            h3 class="skill-title" { (category.title) }
                            ul class="pills" {
                                @for skill in category.skills {
                                    li class="pill" { (skill) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
