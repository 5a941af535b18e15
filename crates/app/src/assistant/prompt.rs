//! Assistant prompt construction.

use mercatus::{catalog::Product, language::Language};

/// Store name the assistant speaks for.
pub const STORE_NAME: &str = "Mercatus Maximus";

/// Build the single prompt sent for a product question.
///
/// Product facts are taken in `lang`, and the model is pinned to reply in it.
pub fn build_prompt(product: &Product, question: &str, lang: Language) -> String {
    let features = product.features(lang).join(", ");

    format!(
        "You are a helpful, futuristic sales assistant for a dropshipping store called \"{STORE_NAME}\".
User Language: {lang} (Reply ONLY in this language).

Product Details:
Product Name: {name}
Price: {price}
Description: {description}
Features: {features}

User Question: \"{question}\"

Instructions:
- Be concise and persuasive.
- Focus on the benefits of the product features.
- If the user asks about shipping or returns, mention \"standard international shipping\".
- Keep the tone polite and slightly futuristic/modern.
- Answer in less than 300 characters if possible.
",
        name = product.name(lang),
        price = product.price,
        description = product.description(lang),
    )
}
