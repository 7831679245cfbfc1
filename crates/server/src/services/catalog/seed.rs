//! Built-in catalog seed data.
//!
//! The reseed endpoint and the CLI `seed` command both install exactly this
//! catalog; everything previously in the `products` table is dropped first.

use rust_decimal::Decimal;
use serde_json::json;

use crate::models::product::NewProduct;

/// The full seed catalog, in insertion order.
#[must_use]
pub fn catalog() -> Vec<NewProduct> {
    vec![
        // Phones
        NewProduct {
            title: "iPhone 14 Pro",
            description: "A16 Bionic, 128GB",
            price: Decimal::from(3699),
            image: "https://th.bing.com/th/id/OIP.bLwuFUU7fWu-lEvMrxMPUQHaJI?w=137&h=180&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "phones",
            stock: 20,
            specs: json!({
                "Chipset": "Apple A16 Bionic",
                "Display": "6.1\" OLED, 2556×1179, 120Hz",
                "RAM": "6GB",
                "Storage": "128GB",
                "RearCamera": "48MP wide + 12MP tele + 12MP ultra-wide",
                "FrontCamera": "12MP",
                "Battery": "~3200 mAh (Apple rates ~23h video)",
                "Charging": "Wired 20W; MagSafe 15W; Qi 7.5W",
                "Connectivity": "5G, Wi-Fi 6, BT 5.3, NFC, Lightning",
                "OS": "iOS",
                "Weight": "≈206 g"
            }),
        },
        NewProduct {
            title: "Galaxy S23",
            description: "Snapdragon 8 Gen 2, 256GB",
            price: Decimal::from(3299),
            image: "https://th.bing.com/th/id/OIP.hQVUtnziJeAuUtTx-BKDHQHaFj?w=230&h=180&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "phones",
            stock: 15,
            specs: json!({
                "Chipset": "Snapdragon 8 Gen 2 for Galaxy",
                "Display": "6.1\" AMOLED, 2340×1080, 120Hz",
                "RAM": "8GB",
                "Storage": "256GB",
                "RearCamera": "50MP + 10MP tele + 12MP ultra-wide",
                "FrontCamera": "12MP",
                "Battery": "3900 mAh",
                "Charging": "25W wired; 15W wireless (Qi/PMA)",
                "Connectivity": "5G, Wi-Fi 6E, BT 5.3, NFC, USB-C",
                "OS": "Android",
                "Weight": "≈168 g"
            }),
        },
        NewProduct {
            title: "Google Pixel 7",
            description: "Tensor G2, 128GB",
            price: Decimal::from(2999),
            image: "https://www.telstra.com.au/content/dam/tcom/devices/mobile/mhdwhst-pxl7/obsidian/landscape-front.png",
            category: "phones",
            stock: 12,
            specs: json!({
                "Chipset": "Google Tensor G2",
                "Display": "6.3\" OLED, 2400×1080, 90Hz",
                "RAM": "8GB",
                "Storage": "128GB",
                "RearCamera": "50MP wide + 12MP ultra-wide",
                "FrontCamera": "10.8MP",
                "Battery": "4355 mAh",
                "Charging": "≈20W wired; up to 20W wireless (Pixel Stand 2)",
                "Connectivity": "5G, Wi-Fi 6E, BT 5.2, NFC, USB-C",
                "OS": "Android",
                "Weight": "≈197 g"
            }),
        },
        NewProduct {
            title: "OnePlus 11",
            description: "Snapdragon 8 Gen 2, 256GB",
            price: Decimal::from(2799),
            image: "https://th.bing.com/th/id/OIP.apes-UjLAD9O15z9VrnArgHaHa?w=157&h=180&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "phones",
            stock: 18,
            specs: json!({
                "Chipset": "Snapdragon 8 Gen 2",
                "Display": "6.7\" AMOLED, 3216×1440, 1–120Hz (LTPO3)",
                "RAM": "16GB",
                "Storage": "256GB",
                "RearCamera": "50MP main + 48MP ultra-wide + 32MP tele",
                "FrontCamera": "16MP",
                "Battery": "5000 mAh",
                "Charging": "100W wired (region dependent)",
                "Connectivity": "5G, Wi-Fi 7*, BT 5.3, NFC, USB-C",
                "OS": "Android (OxygenOS)",
                "Weight": "≈205 g"
            }),
        },
        NewProduct {
            title: "Xiaomi 13 Pro",
            description: "Leica Camera, 256GB",
            price: Decimal::from(2599),
            image: "https://ae-pic-a1.aliexpress-media.com/kf/S27f5dbbcca9a4a219e6b597cca76b159K.jpg_960x960q75.jpg_.avif",
            category: "phones",
            stock: 22,
            specs: json!({
                "Chipset": "Snapdragon 8 Gen 2",
                "Display": "6.73\" AMOLED, 3200×1440, 120Hz",
                "RAM": "12GB",
                "Storage": "256GB",
                "RearCamera": "50MP 1\" main + 50MP tele + 50MP ultra-wide (Leica)",
                "FrontCamera": "32MP",
                "Battery": "4820 mAh",
                "Charging": "120W wired; 50W wireless",
                "Connectivity": "5G, Wi-Fi 6E, BT 5.3, NFC, USB-C",
                "OS": "Android (MIUI)",
                "Weight": "≈229 g"
            }),
        },
        // Laptops
        NewProduct {
            title: "MacBook Air M2",
            description: "13\", 256GB SSD",
            price: Decimal::from(4499),
            image: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=crop&w=600&q=80",
            category: "laptops",
            stock: 10,
            specs: json!({
                "CPU": "Apple M2 (8-core CPU)",
                "GPU": "8-core GPU",
                "Memory": "8GB unified",
                "Storage": "256GB SSD",
                "Display": "13.6\" 2560×1664 (Liquid Retina)",
                "Ports": "MagSafe 3, 2× TB/USB4, 3.5mm",
                "Battery": "52.6Wh (~18h video)",
                "Weight": "≈1.24 kg",
                "OS": "macOS"
            }),
        },
        NewProduct {
            title: "Dell XPS 13",
            description: "i7, 16GB RAM, 512GB SSD",
            price: Decimal::from(4899),
            image: "https://th.bing.com/th/id/OIP.eh7Wpfa0Up_bpVoiKyaLQAHaFj?w=231&h=180&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "laptops",
            stock: 8,
            specs: json!({
                "CPU": "Intel Core i7 (12th Gen U-series)",
                "GPU": "Intel Iris Xe",
                "Memory": "16GB LPDDR5",
                "Storage": "512GB NVMe SSD",
                "Display": "13.4\" FHD+ (1920×1200) or higher",
                "Ports": "2× Thunderbolt 4 (USB-C)",
                "Battery": "~51Wh",
                "Weight": "≈1.17 kg",
                "OS": "Windows 11"
            }),
        },
        NewProduct {
            title: "Lenovo ThinkPad X1",
            description: "i7, 16GB RAM, 1TB SSD",
            price: Decimal::from(5199),
            image: "https://th.bing.com/th/id/OIP.lc9iGlHfBVWNH_n8queAjAHaFM?w=281&h=197&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "laptops",
            stock: 11,
            specs: json!({
                "CPU": "Intel Core i7 (12th Gen)",
                "GPU": "Intel Iris Xe",
                "Memory": "16GB LPDDR5",
                "Storage": "1TB NVMe SSD",
                "Display": "14\" 1920×1200 (IPS) / OLED options",
                "Ports": "2× TB4, USB-A, HDMI, 3.5mm",
                "Battery": "~57Wh",
                "Weight": "≈1.12–1.2 kg",
                "OS": "Windows 11"
            }),
        },
        NewProduct {
            title: "HP Spectre x360",
            description: "2-in-1 Convertible, 512GB",
            price: Decimal::from(4099),
            image: "https://th.bing.com/th/id/OIP.5-dPn22msQqZH5CFxhobCwHaEu?w=289&h=184&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "laptops",
            stock: 14,
            specs: json!({
                "CPU": "Intel Core i7 (12th/13th Gen)",
                "GPU": "Intel Iris Xe",
                "Memory": "16GB",
                "Storage": "512GB NVMe SSD",
                "Display": "13.5\" 1920×1280 touch / OLED higher-res",
                "Ports": "2× TB4 (USB-C), USB-A, microSD",
                "Battery": "~66Wh",
                "Weight": "≈1.3–1.4 kg",
                "OS": "Windows 11"
            }),
        },
        NewProduct {
            title: "Asus ROG Zephyrus",
            description: "Gaming Laptop, RTX 3070",
            price: Decimal::from(6699),
            image: "https://th.bing.com/th/id/OIP.1bNM6XktZ2uJh5f1ABsj-AHaGS?w=231&h=196&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "laptops",
            stock: 7,
            specs: json!({
                "CPU": "AMD Ryzen 9 (5900HS class)",
                "GPU": "NVIDIA GeForce RTX 3070",
                "Memory": "16–32GB",
                "Storage": "1TB NVMe SSD",
                "Display": "15.6\" up to 2560×1440 165Hz",
                "Ports": "USB-C, USB-A, HDMI, audio",
                "Battery": "≈90Wh",
                "Weight": "≈1.9 kg",
                "OS": "Windows 11"
            }),
        },
        // Accessories
        NewProduct {
            title: "Sony WH-1000XM5",
            description: "ANC wireless headphones",
            price: Decimal::from(1499),
            image: "https://th.bing.com/th/id/OIP.OyDkaG1nOKJv--fWEMAriAHaEw?w=229&h=180&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "accessories",
            stock: 25,
            specs: json!({
                "Type": "Headphones (over-ear)",
                "Driver": "30mm",
                "ANC": "Adaptive ANC",
                "Battery": "Up to ~30h (ANC on), USB-C fast charge",
                "Wireless": "Bluetooth 5.2, multipoint",
                "Codecs": "SBC, AAC, LDAC",
                "Charging": "USB-C",
                "Weight": "≈250 g"
            }),
        },
        NewProduct {
            title: "Logitech MX Master 3S",
            description: "Ergonomic wireless mouse",
            price: Decimal::from(449),
            image: "https://techtitanlb.com/wp-content/uploads/2023/03/103NP-1.jpg",
            category: "accessories",
            stock: 30,
            specs: json!({
                "Type": "Mouse",
                "Sensor": "Darkfield",
                "DPI": "Up to 8000",
                "Wireless": "BT Low Energy / Logi Bolt (USB)",
                "Battery": "USB-C recharge (~70 days)",
                "Buttons": "7",
                "Features": "MagSpeed wheel, Flow multi-device",
                "Weight": "≈141 g"
            }),
        },
        NewProduct {
            title: "Apple Watch Series 8",
            description: "Smartwatch with health features",
            price: Decimal::from(1799),
            image: "https://img.joomcdn.net/af32f3cc2759aa60b23ffda9cb566eebd9956412_original.jpeg",
            category: "accessories",
            stock: 19,
            specs: json!({
                "Type": "Smartwatch",
                "CaseSizes": "41mm / 45mm",
                "Chipset": "S8 SiP",
                "Display": "Always-On Retina",
                "Sensors": "ECG, SpO₂, Temp, Compass",
                "Battery": "Up to ~18h, fast charge",
                "WaterResistance": "WR50, IP6X",
                "Connectivity": "BT, Wi-Fi; optional LTE",
                "OS": "watchOS",
                "Weight": "varies by case"
            }),
        },
        NewProduct {
            title: "Samsung Galaxy Buds 2 Pro",
            description: "Wireless earbuds with ANC",
            price: Decimal::from(849),
            image: "https://th.bing.com/th/id/OIP.ZY_IWcBzThexv9sqdNweJAHaDt?w=343&h=174&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "accessories",
            stock: 40,
            specs: json!({
                "Type": "Earbuds",
                "Drivers": "2-way drivers",
                "ANC": "Active Noise Canceling",
                "Battery": "≈5h (ANC on), up to ~18–20h with case",
                "Wireless": "BT 5.3",
                "Codecs": "SSC, AAC, SBC",
                "Charging": "USB-C + Qi wireless",
                "WaterResistance": "IPX7 (buds)",
                "Weight": "≈5.5 g (each)"
            }),
        },
        NewProduct {
            title: "Razer Gaming Keyboard",
            description: "RGB mechanical keyboard",
            price: Decimal::from(599),
            image: "https://img.joomcdn.net/92a604ee91a5ba6b8781ea09ce05eeb7036a8338_1024_1024.jpeg",
            category: "accessories",
            stock: 16,
            specs: json!({
                "Type": "Keyboard",
                "Switches": "Razer Green (clicky) / Yellow (linear)",
                "Layout": "Full-size (varies by model)",
                "Lighting": "Razer Chroma RGB",
                "Connection": "USB",
                "Features": "N-key rollover, programmable macros",
                "Weight": "varies by model"
            }),
        },
        // Other categories
        NewProduct {
            title: "iPad Pro 12.9",
            description: "M2 Chip, 256GB",
            price: Decimal::from(4099),
            image: "https://tse1.mm.bing.net/th/id/OIP.7uEIkRJb_dI3du1LwNrVkAHaG9?rs=1&pid=ImgDetMain&o=7&rm=3",
            category: "tablets",
            stock: 13,
            specs: json!({
                "Chipset": "Apple M2",
                "Display": "12.9\" Liquid Retina XDR, 2732×2048, 120Hz",
                "RAM": "—",
                "Storage": "256GB",
                "RearCamera": "12MP wide + 10MP ultra-wide + LiDAR",
                "FrontCamera": "12MP (Center Stage)",
                "Battery": "Up to ~10h web/video",
                "Connectivity": "Wi-Fi 6, BT 5.3, USB-C (TB)",
                "OS": "iPadOS",
                "Weight": "≈682 g"
            }),
        },
        NewProduct {
            title: "Canon EOS R7",
            description: "Mirrorless Camera, 32MP",
            price: Decimal::from(5499),
            image: "https://th.bing.com/th/id/OIP.9J3LFNc4AD-Fxa_016LDmQHaEK?w=317&h=180&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "cameras",
            stock: 9,
            specs: json!({
                "Sensor": "32.5MP APS-C",
                "Stabilization": "IBIS up to 7 stops",
                "Video": "4K60 (oversampled 4K30), FHD120",
                "Burst": "15 fps mech / 30 fps electronic",
                "Storage": "Dual UHS-II SD",
                "Mount": "Canon RF",
                "Ports": "Mic, headphone, micro-HDMI, USB",
                "Weight": "≈612 g",
                "Waterproof": "Weather-sealed body"
            }),
        },
        NewProduct {
            title: "GoPro Hero 11",
            description: "Action Camera 5.3K",
            price: Decimal::from(1899),
            image: "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?auto=format&fit=crop&w=600&q=80",
            category: "cameras",
            stock: 12,
            specs: json!({
                "Sensor": "1/1.9\" (~27MP stills)",
                "Stabilization": "HyperSmooth 5.0",
                "Video": "5.3K60, 4K120, 2.7K240",
                "Burst": "—",
                "Storage": "microSD",
                "Mount": "GoPro mount",
                "Ports": "USB-C",
                "Weight": "≈154 g",
                "Waterproof": "10 m without housing"
            }),
        },
        NewProduct {
            title: "Bose SoundLink",
            description: "Portable Bluetooth Speaker",
            price: Decimal::from(749),
            image: "https://www.androidauthority.com/wp-content/uploads/2014/02/bose-soundlink-mini-aa-1.jpg",
            category: "accessories",
            stock: 21,
            specs: json!({
                "Type": "Speaker",
                "Output": "Portable BT speaker",
                "Battery": "Up to ~12h (model dependent)",
                "Wireless": "Bluetooth (multipoint varies)",
                "WaterResistance": "Model dependent",
                "Charging": "USB",
                "Weight": "varies by model"
            }),
        },
        NewProduct {
            title: "Samsung 32'' 4K Monitor",
            description: "Ultra HD display",
            price: Decimal::from(1299),
            image: "https://th.bing.com/th/id/OIP.Puint7-0ws-20OhCdk-ogwHaE8?w=290&h=193&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            category: "monitors",
            stock: 15,
            specs: json!({
                "Panel": "VA",
                "Size": "32\"",
                "Resolution": "3840×2160 (4K UHD)",
                "RefreshRate": "60Hz",
                "Color": "sRGB-class (typical for VA)",
                "HDR": "HDR10 (entry level, if supported)",
                "Ports": "2× HDMI 2.0, DisplayPort 1.2",
                "SyncTech": "AMD FreeSync",
                "Contrast": "≈3000:1 (VA typical)"
            }),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_twenty_products() {
        assert_eq!(catalog().len(), 20);
    }

    #[test]
    fn test_catalog_titles_are_unique() {
        let products = catalog();
        let titles: HashSet<&str> = products.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), products.len());
    }

    #[test]
    fn test_catalog_entries_are_saleable() {
        for product in catalog() {
            assert!(product.price > Decimal::ZERO, "{} has no price", product.title);
            assert!(product.stock > 0, "{} has no stock", product.title);
            assert!(product.specs.is_object(), "{} has no spec sheet", product.title);
            assert!(product.image.starts_with("https://"));
        }
    }

    #[test]
    fn test_catalog_covers_all_categories() {
        let categories: HashSet<&str> = catalog().iter().map(|p| p.category).collect();
        for expected in ["phones", "laptops", "accessories", "tablets", "cameras", "monitors"] {
            assert!(categories.contains(expected), "missing category {expected}");
        }
    }
}
