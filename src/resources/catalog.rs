//! Catalog resources: ad media, incentives and products.
//!
//! Recommended filters, as the service documents them:
//!
//! | Filter | Meaning |
//! |---|---|
//! | `program` | limit to one advertiser program |
//! | `region` | limit to a region (e.g. `DE`, `BR`) |
//! | `adspace` | tracking links for this ad space |
//! | `partnership` | `direct` (confirmed) or `indirect` (public pool) |
//! | `items` / `page` | page size and page index |

use crate::traits::Fetch;

/// Banners and links, including tracking links.
///
/// Also accepts `format`, `admediumtype` (html, script, image, imagetext,
/// text), `purpose` (startpage, productdeeplink, categorydeeplink) and
/// `category`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdMedia;

impl Fetch for AdMedia {
    const PATH: &'static str = "/admedia";
    const FILTERS: &'static [&'static str] = &[
        "program",
        "region",
        "format",
        "admediumtype",
        "purpose",
        "partnership",
        "category",
        "adspace",
        "items",
        "page",
    ];
}

/// Coupons and other incentives.
///
/// `incentiveType` is one of coupons, samples, bargains, freeProducts,
/// noShippingCosts, lotteries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Incentives;

impl Fetch for Incentives {
    const PATH: &'static str = "/incentives";
    const FILTERS: &'static [&'static str] =
        &["program", "adspace", "incentiveType", "region", "items", "page"];
}

/// Products, including their tracking links.
///
/// `q` is the search string and `searchtype` picks phrase or contextual
/// search. `programs` takes a comma-separated list of program IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Products;

impl Fetch for Products {
    const PATH: &'static str = "/products";
    const FILTERS: &'static [&'static str] = &[
        "q",
        "searchtype",
        "region",
        "minprice",
        "maxprice",
        "programs",
        "hasimages",
        "adspace",
        "partnership",
        "ean",
        "items",
        "page",
    ];
}
