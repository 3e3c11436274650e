use maud::{html, Markup};
use portfolio_common::model::ContactInfo;
use portfolio_common::motion::Reveal;
use portfolio_common::section::Section;

use super::icons;

pub fn contact(contact: &ContactInfo) -> Markup {
    let section = Section::Contact;

    html! {
        section id=(section.id()) class="section section-light" data-section=(section.id()) {
            div class="container slim" data-reveal="fade" style=(Reveal::section().css_vars()) {
                h2 class="section-title" { (section.heading()) }
                div class="contact-card" {
                    ul class="contact-details" {
                        li {
                            (icons::mail())
                            a class="contact-email" href=(contact.mailto()) { (contact.email) }
                        }
                        li {
                            (icons::phone())
                            span { (contact.phone) }
                        }
                        li {
                            (icons::location())
                            span { (contact.location) }
                        }
                    }
                    div class="socials" {
                        h4 class="socials-title" { "Connect with me" }
                        div class="social-links" {
                            @for social in contact.socials {
                                a class="social-link" href=(social.url) target="_blank" rel="noopener noreferrer" {
                                    @if let Some(icon) = icons::social(social.label) {
                                        (icon)
                                    }
                                    span { (social.label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
