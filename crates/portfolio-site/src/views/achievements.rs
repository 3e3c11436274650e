use maud::{html, Markup};
use portfolio_common::content::asset_url;
use portfolio_common::model::{Achievement, Preview};
use portfolio_common::motion::Reveal;
use portfolio_common::section::Section;

use super::icons;

pub fn achievements(achievements: &[Achievement]) -> Markup {
    let section = Section::Achievements;

    html! {
        section id=(section.id()) class="section section-achievements" data-section=(section.id()) {
            div class="container wide" {
                div class="section-intro" data-reveal="rise" style=(Reveal::rise(0, 0.0).css_vars()) {
                    h2 class="section-title" { (section.heading()) }
                    p class="section-lead" { "Recognition and awards from various hackathons and competitions" }
                }
                div class="achievement-grid" {
                    @for (index, achievement) in achievements.iter().enumerate() {
                        (achievement_card(index, achievement))
                    }
                }
            }
        }
    }
}

/// A card plus, for image previews, its own modal overlay.
///
/// The preview is a plain link to the full image; the client intercepts the
/// click and opens the card's modal instead.
pub fn achievement_card(index: usize, achievement: &Achievement) -> Markup {
    let preview = achievement.preview();

    html! {
        article class="achievement-card" data-achievement=(index) data-reveal="rise"
            style=(Reveal::rise(index, 0.1).css_vars())
        {
            @match preview {
                Some(Preview::Image(src)) => {
                    a class="achievement-preview" href=(asset_url(src)) data-modal-open=(index) {
                        img src=(asset_url(src)) alt={ (achievement.title) " certificate" } loading="lazy";
                    }
                }
                Some(Preview::Document(_)) => {
                    div class="achievement-preview achievement-document" {
                        (icons::document())
                    }
                }
                None => {}
            }
            div class="achievement-heading" {
                h3 class="achievement-title" { (achievement.title) }
                p class="achievement-org" { (achievement.organization) }
                p class="achievement-date" { (achievement.date) }
            }
            p class="achievement-description" { (achievement.description) }
            @if let Some(certificate) = achievement.certificate {
                a class="certificate-link" href=(asset_url(certificate)) target="_blank" rel="noopener noreferrer" {
                    "View certificate"
                }
            }
            @if let Some(Preview::Image(src)) = preview {
                div class="modal" data-modal=(index) role="dialog" aria-modal="true"
                    aria-label={ (achievement.title) " certificate" } hidden
                {
                    img class="modal-image" src=(asset_url(src)) alt="Certificate";
                    button type="button" class="modal-close" data-modal-close=(index) aria-label="Close image" {
                        (icons::close())
                    }
                }
            }
        }
    }
}
