//! Server-rendered markup for the portfolio page

mod about;
mod achievements;
mod contact;
mod hero;
mod icons;
mod layout;
mod projects;
mod skills;

use maud::{html, Markup};
use portfolio_common::content::Portfolio;
use portfolio_common::particles::DriftField;
use portfolio_common::section::Section;

pub struct PageOptions<'a> {
    pub client_module: Option<&'a str>,
    pub hero_particles: &'a DriftField,
}

/// The whole document: every section once, in `Section::ALL` order.
pub fn page(portfolio: &Portfolio, options: &PageOptions<'_>) -> Markup {
    let profile = &portfolio.profile;
    let title = format!("{} | Portfolio", profile.name);

    layout::layout(
        &title,
        profile.summary,
        options.client_module,
        html! {
            main class="page" {
                @for section in Section::ALL {
                    (render_section(section, portfolio, options.hero_particles))
                }
            }
        },
    )
}

pub fn render_section(section: Section, portfolio: &Portfolio, hero_particles: &DriftField) -> Markup {
    match section {
        Section::Hero => hero::hero(&portfolio.profile, hero_particles),
        Section::About => about::about(&portfolio.profile),
        Section::Skills => skills::skills(portfolio.skills),
        Section::Projects => projects::projects(portfolio.projects),
        Section::Achievements => achievements::achievements(portfolio.achievements),
        Section::Contact => contact::contact(&portfolio.contact),
    }
}

#[cfg(test)]
mod tests {
    use portfolio_common::particles::HERO_PARTICLE_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn particles() -> DriftField {
        DriftField::generate(HERO_PARTICLE_COUNT, &mut StdRng::seed_from_u64(42))
    }

    fn render(client_module: Option<&str>) -> String {
        let particles = particles();
        page(
            Portfolio::get(),
            &PageOptions {
                client_module,
                hero_particles: &particles,
            },
        )
        .into_string()
    }

    #[test]
    fn sections_appear_once_in_fixed_order() {
        let html = render(None);
        let mut last = 0;
        for section in Section::ALL {
            let marker = format!("data-section=\"{}\"", section.id());
            assert_eq!(html.matches(&marker).count(), 1, "{section} should render once");
            let pos = html.find(&marker).unwrap();
            assert!(pos > last, "{section} is out of order");
            last = pos;
        }
        assert_eq!(html.matches("data-section=").count(), Section::ALL.len());
    }

    #[test]
    fn project_media_is_exclusive() {
        for (index, project) in Portfolio::get().projects.iter().enumerate() {
            let card = projects::project_card(index, project).into_string();
            if project.media.is_video() {
                assert_eq!(card.matches("<video").count(), 1, "{}", project.title);
                assert!(!card.contains("<img"), "{} must not render an image", project.title);
            } else {
                assert_eq!(card.matches("<img").count(), 1, "{}", project.title);
                assert!(!card.contains("<video"), "{} must not render a video", project.title);
            }
        }
    }

    #[test]
    fn project_cards_alternate_entrance_side() {
        let projects = Portfolio::get().projects;
        let even = projects::project_card(0, &projects[0]).into_string();
        let odd = projects::project_card(1, &projects[1]).into_string();
        assert!(even.contains("--reveal-x:-50px"));
        assert!(odd.contains("--reveal-x:50px"));
    }

    #[test]
    fn projects_heading_has_its_own_entrance() {
        let html = render_section(Section::Projects, Portfolio::get(), &particles()).into_string();
        let heading = html
            .split("<h2")
            .nth(1)
            .and_then(|rest| rest.split('>').next())
            .unwrap();
        assert!(heading.contains("projects-title"));
        assert!(heading.contains("data-reveal=\"drop\""));
        assert!(heading.contains("--reveal-y:-50px"));
    }

    #[test]
    fn asset_paths_are_url_encoded() {
        let html = render(None);
        assert!(html.contains("src=\"/images/ai%20cars.jpg\""));
    }

    #[test]
    fn contact_links_use_exact_literals() {
        let html = render_section(Section::Contact, Portfolio::get(), &particles()).into_string();
        assert!(html.contains("href=\"mailto:souravsuman.dps@gmail.com\""));
        assert!(html.contains(">souravsuman.dps@gmail.com<"));
        assert!(html.contains("href=\"https://github.com/Luciferxy\""));
        assert!(html.contains("href=\"https://www.linkedin.com/in/sourav-suman-075748240/\""));
    }

    #[test]
    fn image_previews_get_a_modal_documents_do_not() {
        use portfolio_common::model::Achievement;

        let image = Achievement {
            title: "Win",
            organization: "Org",
            date: "2024",
            description: "d",
            certificate: None,
            preview: Some("/certificates/win.jpg"),
        };
        let card = achievements::achievement_card(3, &image).into_string();
        assert!(card.contains("data-modal-open=\"3\""));
        assert!(card.contains("data-modal=\"3\""));
        assert!(card.contains("hidden"));

        let document = Achievement {
            preview: Some("/certificates/win.pdf"),
            ..image
        };
        let card = achievements::achievement_card(0, &document).into_string();
        assert!(!card.contains("data-modal"));
        assert!(card.contains("achievement-document"));
    }

    #[test]
    fn static_html_carries_all_text_without_client() {
        let html = render(None);
        let portfolio = Portfolio::get();

        assert!(!html.contains("<script"));
        assert!(!html.contains("class=\"motion"));
        assert!(html.contains(portfolio.profile.name));
        assert!(html.contains(portfolio.profile.education.degree));
        assert!(html.contains(portfolio.profile.education.institution));
        assert!(html.contains(portfolio.profile.roles[0]));
        for category in portfolio.skills {
            for skill in category.skills {
                assert!(html.contains(skill), "missing skill {skill}");
            }
        }
        for project in portfolio.projects {
            assert!(html.contains(project.title), "missing project {}", project.title);
        }
    }

    #[test]
    fn stylesheet_only_hides_content_under_motion() {
        let css = include_str!("../../public/site.css");
        for line in css.lines().filter(|l| l.contains("[data-reveal")) {
            assert!(
                line.trim_start().starts_with(".motion "),
                "reveal rule not scoped to .motion: {line}"
            );
        }
    }

    #[test]
    fn client_module_is_loaded_when_configured() {
        let html = render(Some("/pkg/portfolio_client.js"));
        assert!(html.contains("<script type=\"module\">"));
        assert!(html.contains("import init from \"/pkg/portfolio_client.js\""));
    }
}
