//! Plain-text rendering of storefront views.

use std::fmt::{self, Write};

use bodhon_common::cart::Cart;
use bodhon_common::config::HomeLayout;
use bodhon_common::currency::{format_rupees, Grouping};
use bodhon_common::detail::{DetailTab, ProductDetail};
use bodhon_common::product::Product;
use bodhon_common::showcase::Showcase;

pub fn product_list(products: &[&Product], filtered: bool, query: &str, grouping: Grouping) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if products.is_empty() {
        if filtered && !query.is_empty() {
            writeln!(out, "No matches for {query:?}. Try different keywords or browse categories.")?;
        } else if filtered {
            writeln!(out, "No products in this category.")?;
        } else {
            writeln!(out, "The catalog is empty.")?;
        }
        return Ok(out);
    }
    for p in products {
        let mut badges = Vec::new();
        if p.is_perishable {
            badges.push("Same Day".to_string());
        }
        if let Some(tier) = p.tier {
            badges.push(tier.to_string());
        }
        let badges = if badges.is_empty() {
            String::new()
        } else {
            format!(" [{}]", badges.join(", "))
        };
        writeln!(
            out,
            "{:>3}  {:<32} {:>9}  ★{:.1}{badges}",
            p.id.0,
            p.name,
            format_rupees(p.price, grouping),
            p.rating
        )?;
    }
    Ok(out)
}

pub fn product_detail(detail: &ProductDetail<'_>, grouping: Grouping) -> Result<String, fmt::Error> {
    let p = detail.product;
    let mut out = String::new();
    writeln!(out, "{} / {}", p.category, p.sub_category)?;
    writeln!(out, "{}", p.name)?;
    writeln!(
        out,
        "★{:.1}  {} Customer Reviews  {}",
        p.rating,
        detail.review_count(),
        format_rupees(p.price, grouping)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", p.description)?;
    writeln!(out)?;
    writeln!(out, "{}", detail.tab.label())?;
    match detail.tab {
        DetailTab::Details => {
            for spec in detail.specifications() {
                writeln!(out, "  • {spec}")?;
            }
        }
        DetailTab::Reviews => {
            for review in detail.reviews() {
                let stars: String = review
                    .stars()
                    .iter()
                    .map(|&filled| if filled { '★' } else { '☆' })
                    .collect();
                writeln!(out, "  {} ({})  {stars}", review.user, review.date)?;
                writeln!(out, "    \"{}\"", review.comment)?;
            }
        }
    }
    Ok(out)
}

pub fn cart(cart: &Cart, grouping: Grouping) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if cart.is_empty() {
        writeln!(out, "Your basket is empty")?;
        return Ok(out);
    }
    writeln!(out, "Items ({})", cart.total_count())?;
    for entry in cart.entries() {
        writeln!(
            out,
            "  {:<32} {:>3} × {:>8}  {:>10}",
            entry.product.name,
            entry.quantity,
            format_rupees(entry.product.price, grouping),
            format_rupees(entry.line_total(), grouping)
        )?;
    }
    writeln!(out, "Subtotal   {}", format_rupees(cart.total_price(), grouping))?;
    writeln!(out, "Shipping   Free")?;
    writeln!(out, "Est. Total {}", format_rupees(cart.total_price(), grouping))?;
    Ok(out)
}

pub fn home(layout: HomeLayout, showcase: &Showcase, products: &[&Product], grouping: Grouping) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if layout == HomeLayout::Portfolio {
        writeln!(out, "Our Track Record")?;
        for stat in &showcase.stats {
            writeln!(out, "  {:<16} {}", stat.label, stat.value)?;
        }
        writeln!(out)?;
        for item in &showcase.portfolio {
            writeln!(out, "  [{}] {} ({})", item.tag, item.title, item.stats)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "Premium Style, Local Taste.")?;
    out.push_str(&product_list(products, false, "", grouping)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodhon_common::catalog::{Catalog, CategoryFilter};
    use bodhon_common::product::ProductId;

    #[test]
    fn empty_search_names_the_query() {
        let out = product_list(&[], true, "zebra", Grouping::International).unwrap();
        assert!(out.contains("No matches for \"zebra\""));
    }

    #[test]
    fn reviews_tab_draws_stars() {
        let catalog = Catalog::builtin();
        let product = catalog.find(ProductId(6)).unwrap();
        let mut detail = ProductDetail::new(product, DetailTab::Reviews);
        let out = product_detail(&detail, Grouping::International).unwrap();
        assert!(out.contains("Foodie Meera"));
        assert!(out.contains('★'));

        detail.tab = DetailTab::Details;
        let out = product_detail(&detail, Grouping::International).unwrap();
        assert!(!out.contains("Foodie Meera"));
    }

    #[test]
    fn cart_lists_totals() {
        let catalog = Catalog::builtin();
        let mut c = Cart::new();
        c.add(catalog.find(ProductId(1)).unwrap());
        c.add(catalog.find(ProductId(1)).unwrap());
        let out = cart(&c, Grouping::International).unwrap();
        assert!(out.contains("Items (2)"));
        assert!(out.contains("Est. Total ₹25,000"));
    }

    #[test]
    fn portfolio_layout_leads_with_stats() {
        let catalog = Catalog::builtin();
        let products = catalog.filter(CategoryFilter::All, "");
        let showcase = Showcase::builtin();
        let portfolio = home(HomeLayout::Portfolio, &showcase, &products, Grouping::International).unwrap();
        let plain = home(HomeLayout::Catalog, &showcase, &products, Grouping::International).unwrap();
        assert!(portfolio.starts_with("Our Track Record"));
        assert!(portfolio.contains("Happy Customers"));
        assert!(!plain.contains("Happy Customers"));
        assert!(plain.contains("Luxury Chronograph Rose Gold"));
    }
}
