//! Inline SVG icons

use maud::{html, Markup};

const GITHUB: &str = "M12 2C6.477 2 2 6.477 2 12c0 4.42 2.87 8.17 6.84 9.5.5.08.66-.23.66-.5v-1.69c-2.77.6-3.36-1.34-3.36-1.34-.46-1.16-1.11-1.47-1.11-1.47-.91-.62.07-.6.07-.6 1 .07 1.53 1.03 1.53 1.03.87 1.52 2.34 1.07 2.91.83.09-.65.35-1.09.63-1.34-2.22-.25-4.55-1.11-4.55-4.92 0-1.11.38-2 1.03-2.71-.1-.25-.45-1.29.1-2.64 0 0 .84-.27 2.75 1.02.79-.22 1.65-.33 2.5-.33.85 0 1.71.11 2.5.33 1.91-1.29 2.75-1.02 2.75-1.02.55 1.35.2 2.39.1 2.64.65.71 1.03 1.6 1.03 2.71 0 3.82-2.34 4.66-4.57 4.91.36.31.69.92.69 1.85V21c0 .27.16.59.67.5C19.14 20.16 22 16.42 22 12A10 10 0 0012 2z";
const LINKEDIN: &str = "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z";
const MAIL: &str = "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
const PHONE: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
const PIN: &str = "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z";
const PIN_DOT: &str = "M15 11a3 3 0 11-6 0 3 3 0 016 0z";
const DOCUMENT: &str = "M7 21h10a2 2 0 002-2V9.414a1 1 0 00-.293-.707l-5.414-5.414A1 1 0 0012.586 3H7a2 2 0 00-2 2v14a2 2 0 002 2z";
const CLOSE: &str = "M6 18L18 6M6 6l12 12";

fn filled(d: &str) -> Markup {
    html! {
        svg class="icon" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true" {
            path fill-rule="evenodd" clip-rule="evenodd" d=(d) {}
        }
    }
}

fn outlined(paths: &[&str]) -> Markup {
    html! {
        svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true" {
            @for d in paths {
                path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(d) {}
            }
        }
    }
}

pub fn github() -> Markup {
    filled(GITHUB)
}

pub fn linkedin() -> Markup {
    filled(LINKEDIN)
}

pub fn mail() -> Markup {
    outlined(&[MAIL])
}

pub fn phone() -> Markup {
    outlined(&[PHONE])
}

pub fn location() -> Markup {
    outlined(&[PIN, PIN_DOT])
}

pub fn document() -> Markup {
    outlined(&[DOCUMENT])
}

pub fn close() -> Markup {
    outlined(&[CLOSE])
}

/// Icon for a social link label. Unknown networks get no icon.
pub fn social(label: &str) -> Option<Markup> {
    match label {
        "GitHub" => Some(github()),
        "LinkedIn" => Some(linkedin()),
        _ => None,
    }
}
