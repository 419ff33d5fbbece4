//! Static listing fixtures used to seed an empty catalog.

use super::entities::{Condition, ItemDetails};

/// A fixture listing and the display name of its seller
pub struct FixtureItem {
    pub owner_name: &'static str,
    pub details: ItemDetails,
}

struct Row {
    name: &'static str,
    category: &'static str,
    size: &'static str,
    condition: &'static str,
    description: &'static str,
    brand: Option<&'static str>,
    color: &'static str,
    material: &'static str,
    slug: &'static str,
    location: &'static str,
    owner: &'static str,
    points: i64,
}

const ROWS: [Row; 15] = [
    Row { name: "Vintage Denim Jacket", category: "Outerwear", size: "M", condition: "Like New", description: "Classic 90s wash with brass buttons.", brand: Some("Levi's"), color: "Blue", material: "Denim", slug: "denim-jacket", location: "Brooklyn, NY", owner: "Maya Chen", points: 60 },
    Row { name: "Floral Summer Dress", category: "Dresses", size: "S", condition: "Excellent", description: "Lightweight midi dress, worn twice.", brand: Some("Zara"), color: "Yellow", material: "Viscose", slug: "summer-dress", location: "Austin, TX", owner: "Priya Patel", points: 45 },
    Row { name: "Wool Overcoat", category: "Outerwear", size: "L", condition: "Good", description: "Warm charcoal coat, minor pilling on sleeves.", brand: Some("J.Crew"), color: "Charcoal", material: "Wool", slug: "wool-overcoat", location: "Chicago, IL", owner: "Sam Rivera", points: 80 },
    Row { name: "Striped Breton Top", category: "Tops", size: "XS", condition: "Like New", description: "Navy and white stripes, boat neck.", brand: Some("Saint James"), color: "Navy", material: "Cotton", slug: "breton-top", location: "Portland, OR", owner: "Lena Fischer", points: 30 },
    Row { name: "High-Rise Mom Jeans", category: "Bottoms", size: "28", condition: "Good", description: "Relaxed fit, light fading at the knees.", brand: Some("Abercrombie"), color: "Light Blue", material: "Denim", slug: "mom-jeans", location: "Denver, CO", owner: "Maya Chen", points: 35 },
    Row { name: "Cashmere Crew Sweater", category: "Knitwear", size: "M", condition: "Excellent", description: "Soft oatmeal knit, no holes.", brand: Some("Everlane"), color: "Oatmeal", material: "Cashmere", slug: "cashmere-sweater", location: "Seattle, WA", owner: "Jordan Lee", points: 70 },
    Row { name: "Leather Chelsea Boots", category: "Shoes", size: "42", condition: "Fair", description: "Resoled once, plenty of wear left.", brand: Some("Blundstone"), color: "Brown", material: "Leather", slug: "chelsea-boots", location: "Boston, MA", owner: "Sam Rivera", points: 50 },
    Row { name: "Linen Button-Down", category: "Tops", size: "L", condition: "Like New", description: "Breathable shirt for hot days.", brand: None, color: "White", material: "Linen", slug: "linen-shirt", location: "San Diego, CA", owner: "Ava Johnson", points: 25 },
    Row { name: "Pleated Midi Skirt", category: "Bottoms", size: "M", condition: "Excellent", description: "Satin finish, elastic waist.", brand: Some("H&M"), color: "Emerald", material: "Polyester", slug: "midi-skirt", location: "Atlanta, GA", owner: "Priya Patel", points: 30 },
    Row { name: "Puffer Vest", category: "Outerwear", size: "S", condition: "Good", description: "Packable down vest with zip pockets.", brand: Some("Uniqlo"), color: "Black", material: "Nylon", slug: "puffer-vest", location: "Minneapolis, MN", owner: "Jordan Lee", points: 40 },
    Row { name: "Graphic Band Tee", category: "Tops", size: "M", condition: "Gently Used", description: "Tour shirt, print slightly cracked.", brand: None, color: "Black", material: "Cotton", slug: "band-tee", location: "Nashville, TN", owner: "Ava Johnson", points: 15 },
    Row { name: "Tailored Blazer", category: "Outerwear", size: "S", condition: "Like New", description: "Single-breasted, fully lined.", brand: Some("Mango"), color: "Camel", material: "Polyester", slug: "tailored-blazer", location: "New York, NY", owner: "Lena Fischer", points: 65 },
    Row { name: "Corduroy Trousers", category: "Bottoms", size: "32", condition: "Good", description: "Wide wale, straight leg.", brand: Some("Gap"), color: "Rust", material: "Cotton", slug: "corduroy-trousers", location: "Philadelphia, PA", owner: "Sam Rivera", points: 30 },
    Row { name: "Silk Scarf", category: "Accessories", size: "One Size", condition: "Excellent", description: "Hand-rolled edges, paisley print.", brand: None, color: "Red", material: "Silk", slug: "silk-scarf", location: "Miami, FL", owner: "Maya Chen", points: 20 },
    Row { name: "Canvas Sneakers", category: "Shoes", size: "39", condition: "Fair", description: "Well loved, freshly washed.", brand: Some("Converse"), color: "White", material: "Canvas", slug: "canvas-sneakers", location: "Los Angeles, CA", owner: "Jordan Lee", points: 10 },
];

const IMAGE_HOST: &str = "https://images.rewear.app/items";

/// The seed catalog: 15 listings, each with two images and a location
pub fn fixture_items() -> Vec<FixtureItem> {
    ROWS.iter()
        .map(|row| FixtureItem {
            owner_name: row.owner,
            details: ItemDetails {
                name: row.name.to_string(),
                category: row.category.to_string(),
                size: row.size.to_string(),
                condition: Condition::from(row.condition),
                description: row.description.to_string(),
                brand: row.brand.map(str::to_string),
                color: Some(row.color.to_string()),
                material: Some(row.material.to_string()),
                images: vec![
                    format!("{}/{}-1.jpg", IMAGE_HOST, row.slug),
                    format!("{}/{}-2.jpg", IMAGE_HOST, row.slug),
                ],
                location: row.location.to_string(),
                points_value: row.points,
            },
        })
        .collect()
}
