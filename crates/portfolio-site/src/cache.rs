/// The rendered page, built once at startup.
///
/// The page depends only on compiled content and startup configuration, so
/// it never needs invalidating. The ETag is the quoted hex SHA-256 of the
/// HTML; clients revalidate with `If-None-Match`.
use axum::body::Bytes;
use portfolio_common::content::Portfolio;
use portfolio_common::particles::{DriftField, HERO_PARTICLE_COUNT};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::views::{self, PageOptions};

pub struct PageCache {
    html: Bytes,
    etag: String,
    hero_particles: DriftField,
}

impl PageCache {
    pub fn build<R: Rng>(portfolio: &Portfolio, client_module: Option<&str>, rng: &mut R) -> Self {
        let hero_particles = DriftField::generate(HERO_PARTICLE_COUNT, rng);
        let html = views::page(
            portfolio,
            &PageOptions {
                client_module,
                hero_particles: &hero_particles,
            },
        )
        .into_string();
        let etag = etag_for(&html);
        Self {
            html: Bytes::from(html),
            etag,
            hero_particles,
        }
    }

    pub fn html(&self) -> Bytes {
        self.html.clone()
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Particle layout baked into the page, reused for hero fragments.
    pub fn hero_particles(&self) -> &DriftField {
        &self.hero_particles
    }

    /// Whether an `If-None-Match` header value matches this page.
    pub fn matches(&self, if_none_match: &str) -> bool {
        if_none_match
            .split(',')
            .map(str::trim)
            .any(|tag| tag == "*" || tag.trim_start_matches("W/") == self.etag)
    }
}

fn etag_for(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    let hash = hasher.finalize();
    format!("\"{:x}\"", hash)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn cache(seed: u64) -> PageCache {
        PageCache::build(Portfolio::get(), None, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn etag_is_quoted_sha256() {
        let page = cache(1);
        let etag = page.etag();
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag.len(), 64 + 2);
    }

    #[test]
    fn same_layout_same_etag() {
        assert_eq!(cache(5).etag(), cache(5).etag());
        assert_ne!(cache(5).etag(), cache(6).etag());
    }

    #[test]
    fn if_none_match_forms() {
        let page = cache(1);
        let etag = page.etag().to_string();
        assert!(page.matches(&etag));
        assert!(page.matches(&format!("W/{etag}")));
        assert!(page.matches(&format!("\"other\", {etag}")));
        assert!(page.matches("*"));
        assert!(!page.matches("\"other\""));
    }

    #[test]
    fn hero_particles_are_kept() {
        assert_eq!(cache(1).hero_particles().particles.len(), HERO_PARTICLE_COUNT);
    }
}
