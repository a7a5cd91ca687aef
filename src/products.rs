//! Product queries: category/stock grouping and price-tier partitioning.

use crate::error::{MercatoError, Result};
use crate::types::{CategoryGroup, PriceTier, StockGroup, TierGroup};
use mercato_types::Product;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

/// Group products by category, then by units in stock, collecting unit
/// prices.
///
/// Categories, stock levels within a category, and prices within a stock
/// group all appear in first-encounter order; prices are never re-sorted.
///
/// # Examples
///
/// ```rust
/// use mercato::products::group_by_category_and_stock;
/// use mercato::Product;
/// use rust_decimal::Decimal;
///
/// let products = vec![
///     Product::new("Chai", "Beverages", 39, Decimal::from(18)),
///     Product::new("Chang", "Beverages", 17, Decimal::from(19)),
///     Product::new("Ipoh Coffee", "Beverages", 17, Decimal::from(46)),
///     Product::new("Konbu", "Seafood", 24, Decimal::from(6)),
/// ];
///
/// let groups = group_by_category_and_stock(&products);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].category, "Beverages");
/// assert_eq!(groups[0].stock_groups[1].units_in_stock, 17);
/// assert_eq!(groups[0].stock_groups[1].prices, vec![Decimal::from(19), Decimal::from(46)]);
/// ```
pub fn group_by_category_and_stock(products: &[Product]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut category_index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut stock_index: FxHashMap<(&str, u32), usize> = FxHashMap::default();

    for product in products {
        let ci = *category_index
            .entry(product.category.as_str())
            .or_insert_with(|| {
                groups.push(CategoryGroup {
                    category: product.category.clone(),
                    stock_groups: Vec::new(),
                });
                groups.len() - 1
            });
        let si = *stock_index
            .entry((product.category.as_str(), product.units_in_stock))
            .or_insert_with(|| {
                groups[ci].stock_groups.push(StockGroup {
                    units_in_stock: product.units_in_stock,
                    prices: Vec::new(),
                });
                groups[ci].stock_groups.len() - 1
            });
        groups[ci].stock_groups[si].prices.push(product.unit_price);
    }

    groups
}

/// Partition products into cheap/middle/expensive price tiers.
///
/// A product lands in the cheap tier when its price is at most `cheap`, in
/// the middle tier when it is above `cheap` but at most `middle`, and in the
/// expensive tier otherwise. The `expensive` parameter is echoed as the
/// expensive group's bound but never filters membership, so products priced
/// above it still land in the expensive tier.
///
/// Products are stably sorted by unit price before grouping, so the groups
/// come back in cheap, middle, expensive order with empty tiers omitted and
/// equal-priced products in source order.
///
/// # Errors
///
/// Rejects `cheap > middle` with [`MercatoError::InvalidInput`] before any
/// evaluation.
///
/// # Examples
///
/// ```rust
/// use mercato::products::group_by_price_tier;
/// use mercato::{PriceTier, Product};
/// use rust_decimal::Decimal;
///
/// let products = vec![
///     Product::new("Geitost", "Dairy", 112, Decimal::from(25)),
///     Product::new("Konbu", "Seafood", 24, Decimal::from(5)),
///     Product::new("Tunnbröd", "Grains", 61, Decimal::from(15)),
/// ];
///
/// let tiers = group_by_price_tier(
///     &products,
///     Decimal::from(10),
///     Decimal::from(20),
///     Decimal::from(30),
/// )?;
/// assert_eq!(tiers.len(), 3);
/// assert_eq!(tiers[0].tier, PriceTier::Cheap);
/// assert_eq!(tiers[0].products[0].name, "Konbu");
/// assert_eq!(tiers[2].tier, PriceTier::Expensive);
/// # Ok::<(), mercato::MercatoError>(())
/// ```
pub fn group_by_price_tier<'a>(
    products: &'a [Product],
    cheap: Decimal,
    middle: Decimal,
    expensive: Decimal,
) -> Result<Vec<TierGroup<'a>>> {
    if cheap > middle {
        log::warn!("rejecting price tiers: cheap bound {cheap} above middle bound {middle}");
        return Err(MercatoError::InvalidInput(format!(
            "cheap bound ({cheap}) must not exceed middle bound ({middle})"
        )));
    }

    let mut by_price: Vec<&Product> = products.iter().collect();
    by_price.sort_by(|a, b| a.unit_price.cmp(&b.unit_price));

    let mut groups: Vec<TierGroup<'a>> = Vec::new();
    for product in by_price {
        let tier = classify(product.unit_price, cheap, middle);
        match groups.last_mut() {
            Some(group) if group.tier == tier => group.products.push(product),
            _ => groups.push(TierGroup {
                tier,
                bound: match tier {
                    PriceTier::Cheap => cheap,
                    PriceTier::Middle => middle,
                    PriceTier::Expensive => expensive,
                },
                products: vec![product],
            }),
        }
    }

    Ok(groups)
}

fn classify(price: Decimal, cheap: Decimal, middle: Decimal) -> PriceTier {
    if price <= cheap {
        PriceTier::Cheap
    } else if price <= middle {
        PriceTier::Middle
    } else {
        PriceTier::Expensive
    }
}
