//! Seed Handler
//!
//! Destructively replaces the tour catalog with the fixed demo fixture set
//! (delete all, then insert all). Bookings and users are untouched.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Tour;
use crate::db::repository::TourRepository;
use crate::utils::AppResult;

use shared::client::MessageResponse;

/// GET /api/seed - 重置行程目录为演示数据
pub async fn seed(State(state): State<ServerState>) -> AppResult<Json<MessageResponse>> {
    let repo = TourRepository::new(state.get_db());
    let count = repo.replace_all(fixtures()).await?;

    tracing::info!(count, "Catalog seeded");
    Ok(Json(MessageResponse::new(format!(
        "Seeded {count} Packages Successfully"
    ))))
}

fn tour(
    title: &str,
    location: &str,
    price: f64,
    duration: u32,
    priority: &str,
    image: &str,
    short_desc: &str,
    full_desc: &str,
) -> Tour {
    Tour {
        id: None,
        title: title.to_string(),
        short_desc: short_desc.to_string(),
        full_desc: full_desc.to_string(),
        price,
        duration,
        priority: priority.to_string(),
        image: image.to_string(),
        location: location.to_string(),
    }
}

/// The demo catalog, exactly as shipped with the original frontend
fn fixtures() -> Vec<Tour> {
    vec![
        tour(
            "Santorini Sunset Bliss",
            "Greece",
            2400.0,
            7,
            "Premium",
            "https://media.printler.com/media/photo/173450.jpg?rmode=crop&width=638&height=900",
            "White domes and blue seas.",
            "Explore the magical island of Santorini...",
        ),
        tour(
            "Kyoto Cherry Blossoms",
            "Japan",
            3200.0,
            10,
            "VIP",
            "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?q=80&w=800",
            "Springtime magic in Japan.",
            "Walk through ancient temples...",
        ),
        tour(
            "Swiss Alps Skiing",
            "Switzerland",
            4500.0,
            8,
            "VIP",
            "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?q=80&w=800",
            "Luxury ski resort experience.",
            "Top tier skiing in the Alps...",
        ),
        tour(
            "Bali Tropical Escape",
            "Indonesia",
            1200.0,
            6,
            "Standard",
            "https://images.unsplash.com/photo-1537996194471-e657df975ab4?q=80&w=800",
            "Beaches, temples and jungles.",
            "Relax in Ubud and Seminyak...",
        ),
        tour(
            "Machu Picchu Hike",
            "Peru",
            1800.0,
            5,
            "Premium",
            "https://images.unsplash.com/photo-1526392060635-9d6019884377?q=80&w=800",
            "The lost city of Incas.",
            "A guided trek to history...",
        ),
        tour(
            "Safari in Serengeti",
            "Tanzania",
            5000.0,
            12,
            "VIP",
            "https://images.unsplash.com/photo-1516426122078-c23e76319801?q=80&w=800",
            "Witness the Big Five.",
            "Luxury tents and game drives...",
        ),
        tour(
            "New York City Lights",
            "USA",
            2100.0,
            5,
            "Standard",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRZOlHSl4k1inEdM4UTWuYLa1Kes5ozV_C41g&s",
            "The city that never sleeps.",
            "Broadway, Times Square, and more...",
        ),
        tour(
            "Parisian Romance",
            "France",
            2800.0,
            7,
            "Premium",
            "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?q=80&w=800",
            "Love in the air.",
            "Eiffel tower dinners and Louvre tours...",
        ),
        tour(
            "Iceland Northern Lights",
            "Iceland",
            3500.0,
            6,
            "Premium",
            "https://images.unsplash.com/photo-1476610182048-b716b8518aae?q=80&w=800",
            "Aurora Borealis hunt.",
            "Glaciers, geysers and lights...",
        ),
        tour(
            "Dubai Desert Safari",
            "UAE",
            1500.0,
            5,
            "Standard",
            "https://media2.thrillophilia.com/images/photos/000/124/492/original/1527232809_shutterstock_705430021_jpg?width=975&height=600",
            "Luxury amidst sand dunes.",
            "Burj Khalifa and desert camping...",
        ),
        tour(
            "Great Barrier Reef",
            "Australia",
            3100.0,
            9,
            "Premium",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTqgoaY5dubp6gP1vLAivq2pt5jzGb6N3HFiA&s",
            "Dive into the blue.",
            "Snorkeling and island hopping...",
        ),
        tour(
            "Amalfi Coast Drive",
            "Italy",
            2900.0,
            7,
            "VIP",
            "https://duespaghetti.com/wp-content/uploads/2023/07/1-1.jpg",
            "Scenic coastal beauty.",
            "Positano, Amalfi and Ravello...",
        ),
        tour(
            "Cappadocia Hot Air Balloons",
            "Turkey",
            1600.0,
            4,
            "Standard",
            "https://images.unsplash.com/photo-1641128324972-af3212f0f6bd?q=80&w=800",
            "Fairy chimneys from above.",
            "Sunrise balloon rides...",
        ),
        tour(
            "Pyramids of Giza",
            "Egypt",
            1400.0,
            6,
            "Standard",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcToxbohCJNWQPAWElPJf8na8f-iza-RCyrrtQ&s",
            "Ancient wonders.",
            "Cairo, Luxor and the Nile...",
        ),
        tour(
            "Maldives Water Villa",
            "Maldives",
            6000.0,
            5,
            "VIP",
            "https://images.unsplash.com/photo-1514282401047-d79a71a590e8?q=80&w=800",
            "Ultimate luxury.",
            "Private pool over the ocean...",
        ),
        tour(
            "Banff National Park",
            "Canada",
            2200.0,
            7,
            "Premium",
            "https://cdn.britannica.com/71/94371-050-293AE931/Mountains-region-Ten-Peaks-Moraine-Lake-Alberta.jpg",
            "Mountain lakes and bears.",
            "Hiking in the Rockies...",
        ),
        tour(
            "Rio de Janeiro Carnival",
            "Brazil",
            2000.0,
            5,
            "Standard",
            "https://images.unsplash.com/photo-1483729558449-99ef09a8c325?q=80&w=800",
            "Samba and sun.",
            "Copacabana and Christ the Redeemer...",
        ),
        tour(
            "Cape Town Explorer",
            "South Africa",
            2300.0,
            8,
            "Premium",
            "https://images.unsplash.com/photo-1580060839134-75a5edca2e99?q=80&w=800",
            "Table mountain views.",
            "City, wine and penguins...",
        ),
        tour(
            "Scottish Highlands",
            "UK",
            1900.0,
            6,
            "Standard",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR8Cn-x4APG7h5ihs2oR3k2lTyS6zoUCl4Irw&s",
            "Castles and Lochs.",
            "Edinburgh to Inverness...",
        ),
        tour(
            "Petra by Night",
            "Jordan",
            1700.0,
            5,
            "Standard",
            "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/2a/75/2c/61/petra-by-night-with-candles.jpg?w=1200&h=1200&s=1",
            "The Rose City.",
            "Treasury and desert jeep tours...",
        ),
        tour(
            "Grand Canyon Helicopter",
            "USA",
            2600.0,
            4,
            "Premium",
            "https://images.unsplash.com/photo-1615551043360-33de8b5f410c?q=80&w=800",
            "Nature's masterpiece.",
            "Vegas and the Canyon...",
        ),
        tour(
            "Venice Canal Tour",
            "Italy",
            3000.0,
            6,
            "VIP",
            "https://images.unsplash.com/photo-1514890547357-a9ee288728e0?q=80&w=800",
            "City of Water.",
            "Gondola rides and glass making...",
        ),
        tour(
            "Hawaii Volcanoes",
            "USA",
            3400.0,
            8,
            "Premium",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcT74ysNpkJabgtAZJITzSEI2W5UM77ceGnK2w&s",
            "Aloha spirit.",
            "Beaches and lava fields...",
        ),
        tour(
            "Costa Rica Rainforest",
            "Costa Rica",
            1800.0,
            7,
            "Standard",
            "https://images.unsplash.com/photo-1519659528534-7fd733a832a0?q=80&w=800",
            "Pura Vida.",
            "Sloths, ziplining and beaches...",
        ),
        tour(
            "Taj Mahal Visit",
            "India",
            1100.0,
            5,
            "Standard",
            "https://images.unsplash.com/photo-1564507592333-c60657eea523?q=80&w=800",
            "Symbol of Love.",
            "Delhi, Agra and Jaipur...",
        ),
        tour(
            "Patagonia Trek",
            "Chile",
            3600.0,
            10,
            "VIP",
            "https://www.cascada.travel/hs-fs/hubfs/FOTOS%20CASCADA/Selecci%C3%B3n%20Mejores%20Fotos%20EcoCamp/Torres%20del%20Paine.jpg?width=1920&name=Torres%20del%20Paine.jpg",
            "End of the World.",
            "Glaciers and mountains...",
        ),
        tour(
            "Vietnam Ha Long Bay",
            "Vietnam",
            1300.0,
            7,
            "Standard",
            "https://images.unsplash.com/photo-1528127269322-539801943592?q=80&w=800",
            "Emerald Waters.",
            "Cruise on a junk boat...",
        ),
        tour(
            "Prague Old Town",
            "Czech Republic",
            1600.0,
            5,
            "Standard",
            "https://images.unsplash.com/photo-1519677100203-a0e668c92439?q=80&w=800",
            "Fairytale city.",
            "Charles Bridge and castles...",
        ),
        tour(
            "Bora Bora Bungalow",
            "French Polynesia",
            7000.0,
            6,
            "VIP",
            "https://images.unsplash.com/photo-1532408840957-031d8034aeef?q=80&w=800",
            "Pacific Paradise.",
            "Crystal clear lagoon...",
        ),
        tour(
            "Alaskan Cruise",
            "USA",
            3800.0,
            9,
            "Premium",
            "https://cdn1.alaskatravel.com/public/photos/00000160/royal-caribbean-cruises-ovation-160-1-HeroSubPage.jpg",
            "Wild Frontier.",
            "Whales and icebergs...",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn fixture_set_is_complete() {
        let tours = fixtures();
        assert_eq!(tours.len(), 30);
        // Every entry must be displayable without placeholders
        for t in &tours {
            assert!(!t.title.is_empty());
            assert!(!t.location.is_empty());
            assert!(t.price > 0.0);
            assert!(t.duration > 0);
            assert!(t.image.starts_with("https://"));
        }
    }
}
