//! Crumbtrail - schema.org-annotated breadcrumb trails for websites.
//!
//! Two components, consumed in sequence: [`TrailBuilder`] turns a
//! host-supplied [`PageContext`] into an ordered crumb list, and
//! [`render_trail`] serializes that list into an HTML fragment with
//! BreadcrumbList structured data. [`generate_breadcrumbs`] composes the two.
//!
//! ```no_run
//! use crumbtrail::{config::TrailConfig, generate_breadcrumbs, snapshot::SiteSnapshot};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = TrailConfig::default();
//! let snapshot = SiteSnapshot::from_path("site.json".as_ref())?;
//!
//! let html = generate_breadcrumbs(&snapshot.context()?, &config, snapshot.resolvers());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod render;
pub mod resolve;
pub mod snapshot;
pub mod utils;

pub use builder::{Crumb, TrailBuilder};
pub use config::TrailConfig;
pub use context::{PageContext, SingularContext};
pub use render::render_trail;
pub use resolve::{HierarchyResolver, Resolvers, TaxonomyResolver, TaxonomyTerm};

/// Build and render the breadcrumb trail for one page view.
///
/// Pure and total: the same inputs always produce the same markup, and a
/// well-formed context never fails — resolver misses degrade to omitted
/// crumbs.
pub fn generate_breadcrumbs(
    context: &PageContext,
    config: &TrailConfig,
    resolvers: Resolvers<'_>,
) -> String {
    let crumbs = TrailBuilder::new(config, resolvers).build(context);
    render_trail(&crumbs, config)
}
