use maud::{html, Markup};
use portfolio_common::content::asset_url;
use portfolio_common::model::{Media, Project};
use portfolio_common::motion::Reveal;
use portfolio_common::section::Section;

use super::icons;

pub fn projects(projects: &[Project]) -> Markup {
    let section = Section::Projects;

    html! {
        section id=(section.id()) class="section section-projects" data-section=(section.id()) {
            // Painted by the client; the gradient alone shows without it.
            div class="project-field" aria-hidden="true" {
                div class="project-field-gradient" data-field-gradient="" {}
                canvas class="project-field-canvas" id="project-field" {}
            }
            div class="container wide" data-reveal="fade" style=(Reveal::section().css_vars()) {
                h2 class="section-title projects-title" data-reveal="drop" style=(Reveal::heading().css_vars()) {
                    (section.heading())
                }
                div class="project-grid" {
                    @for (index, project) in projects.iter().enumerate() {
                        (project_card(index, project))
                    }
                }
            }
        }
    }
}

/// One card. The media slot holds either a `<video>` or an `<img>`, never both.
pub fn project_card(index: usize, project: &Project) -> Markup {
    html! {
        article class="project-card" data-project=(index) data-reveal="slide"
            style=(Reveal::project_card(index).css_vars())
        {
            div class="project-media" {
                @match project.media {
                    Media::Video { src } => {
                        video class="project-video" data-project-video=(index) src=(asset_url(src))
                            muted loop playsinline preload="metadata" {}
                    }
                    Media::Image { src } => {
                        img class="project-image" src=(asset_url(src)) alt=(project.title) loading="lazy";
                    }
                }
                div class="project-media-shade" {}
            }
            div class="project-body" {
                div class="project-header" {
                    h3 class="project-title" { (project.title) }
                    span class="project-category" { (project.category) }
                }
                p class="project-description" { (project.description) }
                ul class="tech-tags" {
                    @for (i, tech) in project.technologies.iter().enumerate() {
                        li class="tech-tag" data-reveal="pop" style=(Reveal::tech_tag(i).css_vars()) { (tech) }
                    }
                }
                div class="project-links" {
                    a class="source-link" href=(project.source_url) target="_blank" rel="noopener noreferrer" {
                        (icons::github())
                        span { "Source Code" }
                    }
                }
            }
        }
    }
}
