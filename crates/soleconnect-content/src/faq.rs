//! Static FAQ content, grouped into ordered categories.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// All categories in display order.
pub fn categories() -> &'static [FaqCategory] {
    CATEGORIES
}

static CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        name: "General Questions",
        description: "Common questions about shoe repair services",
        items: &[
            FaqItem {
                question: "How do I know if my shoes can be repaired?",
                answer: "Most quality shoes can be repaired, but feasibility depends on material condition, the extent of damage, and how the shoe is constructed. Welted or stitched construction is far more repairable than cemented construction. If the upper is in good shape, resoling and most other repairs are usually possible; bring the pair to a professional cobbler for an assessment, as most offer free evaluations.",
            },
            FaqItem {
                question: "How much does shoe repair typically cost?",
                answer: "Costs vary with the service, materials, and complexity. Basic heel replacement usually runs $15-40, while a complete resole of quality shoes can reach $50-100 or more. High-end and specialty footwear costs more because of the craftsmanship involved. Most shops give free estimates, so get one before deciding between repair and replacement.",
            },
            FaqItem {
                question: "How long does shoe repair usually take?",
                answer: "Standard repairs take three to seven days depending on the shop's workload. Simple jobs like heel tips may be done while you wait, while complete rebuilds can take one to two weeks. Many shops offer rush service for an extra fee; always ask for a time estimate at drop-off.",
            },
            FaqItem {
                question: "Is it worth repairing inexpensive shoes?",
                answer: "For shoes under roughly $50-75, a resole may cost as much as replacement, but minor work like regluing a sole or new heel tips is often still economical. The environmental benefit of extending a shoe's life is worth weighing too. Comfortable, well-fitting shoes in otherwise good condition are generally worth repairing regardless of what they cost new.",
            },
        ],
    },
    FaqCategory {
        name: "Services & Repairs",
        description: "Information about specific repair services",
        items: &[
            FaqItem {
                question: "What types of shoe repairs are most common?",
                answer: "Heel replacement, resoling, stitching repairs, stretching, and patching uppers top the list. Heel tips are especially common on women's heels, and sole replacement on well-loved dress shoes and work boots. Most shops also offer cleaning, reconditioning, and waterproofing.",
            },
            FaqItem {
                question: "Can cobblers repair other leather items besides shoes?",
                answer: "Yes. Most cobblers also handle purses and handbags (handles, zippers, linings), belts, luggage, and leather jackets. Some work on specialized items like saddles or instrument cases. If it is leather and broken, it is worth asking.",
            },
            FaqItem {
                question: "Can athletic shoes be repaired?",
                answer: "Modern athletic shoes are harder to repair than traditional footwear because of their construction, but regluing separated soles, patching small tears, replacing insoles, and reconditioning are all possible. Some shops specialize in high-end running shoes; ask about their experience with athletic footwear first.",
            },
            FaqItem {
                question: "How do I know if my shoes need to be resoled?",
                answer: "Watch for wear through the sole material, uneven wear that changes your gait, cracks, or a sole separating from the upper. Leather soles are due when they get thin enough to feel the ground. Catching sole problems early prevents structural damage and extends the shoe's life considerably.",
            },
        ],
    },
    FaqCategory {
        name: "Shoe Care",
        description: "Tips for maintaining and caring for your shoes",
        items: &[
            FaqItem {
                question: "How often should I condition leather shoes?",
                answer: "Every one to three months with regular wear, and more often in Florida's humidity, which dries leather and invites mildew. Condition after cleaning so the conditioner replaces the oils removed in the process, use a product suited to your leather type, and test it somewhere inconspicuous first.",
            },
            FaqItem {
                question: "What's the best way to protect shoes in Florida's humid climate?",
                answer: "Use water and stain repellents matched to the material, store shoes with ventilation to prevent mildew, and use cedar shoe trees to absorb moisture and hold shape. Keep pairs out of direct sunlight, and for long storage add silica gel packets to the boxes.",
            },
            FaqItem {
                question: "How can I make my shoes more comfortable?",
                answer: "Professional stretching handles tight spots in both width and length, quality insoles beat factory ones for arch support, and targeted padding fixes pressure points. Cobblers can also pad tongues and collars, adjust toe boxes, or modify shoes for specific foot conditions.",
            },
            FaqItem {
                question: "How should I clean different types of shoe materials?",
                answer: "Leather wants a damp cloth, leather cleaner, and conditioner afterward. Suede needs a suede brush and eraser, never water. Canvas can be spot-cleaned or machine-washed gently, and synthetics usually clean up with mild soap and water. Air dry everything away from heat, and consider professional cleaning for valuable pairs.",
            },
        ],
    },
    FaqCategory {
        name: "Finding a Cobbler",
        description: "Help with locating and choosing shoe repair services",
        items: &[
            FaqItem {
                question: "How do I find a good cobbler in Florida?",
                answer: "Start with the SoleConnect directory and its verified customer reviews. Longevity in the trade is a good signal, as are recommendations from high-end shoe stores and before/after photos of a shop's work. A good cobbler talks through your options and will tell you when a repair is not worthwhile; try a small job first before entrusting valuable shoes.",
            },
            FaqItem {
                question: "What should I look for when choosing a shoe repair shop?",
                answer: "Cleanliness and organization reflect attention to detail. Good shops ask questions about your shoes, explain the options, use materials matching the original construction, and give clear pricing and timeframes. Years in business matter in a craft refined over decades, and shops handling high-end work usually have the skills for everything else.",
            },
            FaqItem {
                question: "What questions should I ask a cobbler before leaving my shoes?",
                answer: "Ask what repairs they recommend and why, what materials they will use and whether those match the original construction, the cost and timeline, and their experience with similar brands. Ask about guarantees and what happens if problems appear after the repair, plus any prevention tips for the future.",
            },
            FaqItem {
                question: "Do cobblers offer pickup and delivery services?",
                answer: "Increasingly yes, especially in urban areas, and several Florida shops run mail-in repair services with shipping guidelines. Some waive the fee above a certain repair value. Check individual directory listings for shops offering these options.",
            },
        ],
    },
];
