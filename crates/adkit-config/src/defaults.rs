use std::collections::BTreeMap;

use adkit_core::{LinkBuilderType, LinkChannel, LinkProduct};

use crate::AppConfig;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut products_by_brand = BTreeMap::new();
        products_by_brand.insert(
            "CHUBBLIFE".to_string(),
            strings(&["SAVING-21/15", "LIFE-TERM10/10"]),
        );
        products_by_brand.insert(
            "FWD".to_string(),
            strings(&[
                "SAVING-forpension857",
                "SAVING-For-Saving-2010",
                "HEALTH-Easy-E-CANCER",
                "HEALTH-BIG3",
                "HEALTH-delight-care",
            ]),
        );
        products_by_brand.insert(
            "GENERALI".to_string(),
            strings(&["SENIOR-GEN-SENIOR-55", "GEN-HEALTH-LUMP-SUM-PLUS"]),
        );
        products_by_brand.insert(
            "THAILIFE".to_string(),
            strings(&[
                "MONEYSAVING14/6",
                "HAPPY",
                "SENIOR-MORRADOK",
                "SENIOR-BONECARE",
                "EXTRASENIOR-BUPHAKARI",
                "TOPUP-SICK",
                "SABAI-JAI",
                "LEGACY-FIT-CI-CARE",
            ]),
        );
        products_by_brand.insert(
            "SILKSPAN".to_string(),
            strings(&["Home", "Car-insurance", "Type1", "Type2+", "Type3+", "Type3"]),
        );

        Self {
            objectives: strings(&["CONVERSIONS", "LEADGENERATION", "MESSAGES"]),
            brandings: strings(&["CHUBBLIFE", "FWD", "GENERALI", "THAILIFE", "SILKSPAN"]),
            categories: strings(&["LIFE", "SAVING", "Cl", "HEALTH"]),
            products_by_brand,
            pages: strings(&[
                "Facebook Page A",
                "TikTok Main",
                "Line OA",
                "สร้างมรดกหลักล้าน ด้วยประกันชีวิต",
                "ประกันสำหรับคนทำงาน",
                "ประกันสุขภาพเพื่อครอบครัว",
                "ประกันสุขภาพเหมาจ่าย จบจริง",
                "ประกันชีวิต สูงวัยได้เงินชัวร์-เพื่อผู้สูงวัย",
                "SILKSPAN",
                "ประกันภัยรถยนต์",
                "ประกันสุขภาพ",
                "ประกันสุขภาพทั่วไทย",
                "ประกันสุขภาพและมะเร็งสุดคุ้ม",
                "พร้อมใช้ชีวิตชิลๆ ในวัยเกษียณ",
                "Take Care มะเร็ง",
            ]),
            ad_set_categories: strings(&[
                "Food & Drink",
                "Finance",
                "Situation",
                "Real Estate",
                "Shopping",
                "Business",
                "Health",
                "Car & Vehicle",
                "Family & Status",
                "Pollution",
                "Horo",
                "Competitor",
                "Department",
                "Crypto",
                "Electric",
                "Game",
                "GAS & Fuel",
                "Lookalike",
                "Telco",
                "Travel",
                "Sports",
                "Entertainment",
                "Online",
                "Natural",
                "Agent",
                "Career & Job",
                "home garden",
                "Non-Category",
                "retargeting",
            ]),
            locations: strings(&["TH", "BKK", "UPC"]),
            link_channels: vec![
                channel("Facebook ads", "Ads-Fb-"),
                channel("Line ads", "Ads-Line-"),
                channel("Line BC", "BC-Line-"),
                channel("New", "Ads-news-"),
                channel("Google ads", "Ads-gg-"),
                channel("Tiktok ads", "Ads-tiktok-"),
            ],
            link_builder_types: vec![
                builder_type("Car Insurance", "ins-"),
                builder_type("Lead Agency", "life-"),
            ],
            link_products: vec![
                product(
                    "THAILIFE",
                    "Buphakari (สูงวัยมีทรัพย์)",
                    "https://www.silkspan.com/online/life-insurance/thailife-extra-senior-ab",
                ),
                product(
                    "THAILIFE",
                    "Morradok (สูงวัยไร้กังวล)",
                    "https://www.silkspan.com/online/life-insurance/thailife-senior-ab/",
                ),
                product(
                    "THAILIFE",
                    "ซีเนียร์ โบน แคร์ (เพื่อผู้สูงอายุ)",
                    "https://www.silkspan.com/online/life-insurance/thailife-legacyfitsenior-ab",
                ),
                product(
                    "THAILIFE",
                    "14/6 Money Saving",
                    "https://www.silkspan.com/online/life-insurance/thailife-money-saving-14-6/",
                ),
                product(
                    "THAILIFE",
                    "15/5 Saving Happy",
                    "https://www.silkspan.com/online/life-insurance/thailife-smile/",
                ),
                product(
                    "THAILIFE",
                    "CI Leagacy",
                    "https://www.silkspan.com/online/life-insurance/thailife-cancer-money-sure/",
                ),
                product(
                    "THAILIFE",
                    "Health (เฮลท์เหมาสบายใจ)",
                    "https://www.silkspan.com/online/life-insurance/thailife-health-sabai-jai/",
                ),
                product(
                    "THAILIFE",
                    "Topup (เติมเงินยามป่วย)",
                    "https://www.silkspan.com/online/life-insurance/thailife-topup/",
                ),
                product(
                    "CHUBB",
                    "Chubb Life",
                    "https://www.silkspan.com/online/chubb/chubb-life/",
                ),
                product(
                    "GENERALI",
                    "Generali Health",
                    "https://www.silkspan.com/health/generali/gen-health-lump-sum-plus/",
                ),
                product(
                    "GENERALI",
                    "Generali Senior",
                    "https://www.silkspan.com/life-insurance/generali/gen-senior-55/",
                ),
                product(
                    "FWD",
                    "Easy-E-CANCER",
                    "https://www.silkspan.com/fwd/easy-e-cancer/",
                ),
                product(
                    "FWD",
                    "Delight Care",
                    "https://www.silkspan.com/online/fwd/delight-care-80-80/",
                ),
                product("FWD", "BIG3", "https://www.silkspan.com/fwd/big-3/"),
                product(
                    "FWD",
                    "For Pension 85/7",
                    "https://www.silkspan.com/online/fwd/for-pension85-7/",
                ),
                product(
                    "FWD",
                    "For Saving 20/10",
                    "https://www.silkspan.com/online/fwd-for-saving-20-10/",
                ),
                product("SILKSPAN", "Home", "https://www.silkspan.com/"),
                product(
                    "SILKSPAN",
                    "Car-insurance",
                    "https://www.silkspan.com/car-insurance/",
                ),
                product(
                    "SILKSPAN",
                    "Type1",
                    "https://www.silkspan.com/car-insurance/type1/",
                ),
                product(
                    "SILKSPAN",
                    "Type2+",
                    "https://www.silkspan.com/car-insurance/type2plus/",
                ),
                product(
                    "SILKSPAN",
                    "Type3+",
                    "https://www.silkspan.com/car-insurance/type3plus/",
                ),
                product(
                    "SILKSPAN",
                    "Type3",
                    "https://www.silkspan.com/car-insurance/type3/",
                ),
            ],
        }
    }
}

fn channel(label: &str, value: &str) -> LinkChannel {
    LinkChannel {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn builder_type(label: &str, value: &str) -> LinkBuilderType {
    LinkBuilderType {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn product(brand: &str, product: &str, url: &str) -> LinkProduct {
    LinkProduct {
        brand: brand.to_string(),
        product: product.to_string(),
        url: url.to_string(),
    }
}
