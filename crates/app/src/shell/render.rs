//! Shell output.

use std::io;

use mercatus::{
    catalog::{Catalog, Product},
    language::Language,
    reviews::{Rating, RatingFilter, Review, ReviewStatus},
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

pub(crate) fn catalog(
    out: &mut impl io::Write,
    catalog: &Catalog,
    lang: Language,
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Product", "Category", "Price"]);

    for product in catalog.iter() {
        builder.push_record([
            product.id.to_string(),
            product.name(lang).to_string(),
            product.category.clone(),
            product.price.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::last(), Alignment::right());

    writeln!(out, "{table}")
}

pub(crate) fn product(
    out: &mut impl io::Write,
    product: &Product,
    lang: Language,
) -> io::Result<()> {
    writeln!(out, "{} [{}]", product.name(lang), product.id)?;
    writeln!(out, "{} | {}", product.category, product.price)?;
    writeln!(out, "{}", product.description(lang))?;

    for feature in product.features(lang) {
        writeln!(out, "  + {feature}")?;
    }

    Ok(())
}

pub(crate) fn reviews(
    out: &mut impl io::Write,
    reviews: &[&Review],
    filter: RatingFilter,
) -> io::Result<()> {
    writeln!(out, "Reviews (rating: {filter})")?;

    if reviews.is_empty() {
        return writeln!(out, "  No reviews yet.");
    }

    for review in reviews {
        let badge = match review.status {
            ReviewStatus::Pending => " (awaiting moderation)",
            ReviewStatus::Approved => "",
        };

        writeln!(
            out,
            "  {} {} {}{badge}",
            stars(review.rating),
            review.user_name,
            review.date
        )?;
        writeln!(out, "    {}", review.comment)?;
    }

    Ok(())
}

fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.stars());
    let empty = usize::from(Rating::MAX).saturating_sub(filled);

    format!("{}{}", "*".repeat(filled), ".".repeat(empty))
}
