//! Static blog content.
//!
//! Posts live in an ordered slice (newest first) with a `phf` map from
//! slug to slice index for lookup. Bodies are markdown; rendering is the
//! client's concern.

use chrono::NaiveDate;
use serde::Serialize;

/// One editorial post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    /// URL-safe identifier, unique across all posts.
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    /// ISO date (`YYYY-MM-DD`) the post went live.
    pub published: &'static str,
    pub read_minutes: u32,
    /// Markdown body.
    pub body: &'static str,
}

impl BlogPost {
    /// Publication date parsed from the embedded ISO string.
    pub fn published_date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d")
            .expect("embedded publication dates are valid ISO dates")
    }
}

/// All posts, newest first.
pub fn posts() -> &'static [BlogPost] {
    POSTS
}

/// Slug lookup via the compile-time index.
pub fn by_slug(slug: &str) -> Option<&'static BlogPost> {
    BY_SLUG.get(slug).map(|&index| &POSTS[index])
}

static BY_SLUG: phf::Map<&'static str, usize> = phf::phf_map! {
    "how-to-make-your-shoes-last-longer" => 0,
    "when-to-repair-vs-replace-your-shoes" => 1,
    "the-art-of-cobbling-floridas-shoe-repair-experts" => 2,
    "best-shoe-materials-for-florida-climate" => 3,
    "diy-shoe-repair-tips-every-floridian-should-know" => 4,
    "sustainable-footwear-repair-and-recycling-options" => 5,
};

static POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "how-to-make-your-shoes-last-longer",
        title: "How to Make Your Shoes Last Longer",
        excerpt: "Learn the essential care techniques that can extend the life of your favorite shoes by years, saving you money and reducing waste.",
        category: "Shoe Care",
        author: "Maria Rodriguez",
        published: "2025-05-12",
        read_minutes: 5,
        body: "\
# How to Make Your Shoes Last Longer\n\
\n\
Your shoes are an investment, and with proper care you can extend their \
lifespan significantly. Clean them regularly with methods suited to the \
material: a damp cloth and conditioner for leather, a dedicated brush for \
suede, mild soap for canvas. Store them in a cool, dry place with shoe \
trees to hold their shape, and rotate between at least two or three pairs \
so the moisture from each day's wear can fully evaporate.\n\
\n\
Preventative work pays off the most. Add protective rubber soles to \
leather-soled shoes before they wear through, replace heel tips at the \
first sign of wear, and fix loose stitching immediately. Florida's humid \
climate adds its own hazards: mildew, salt water, and beach sand are all \
hard on footwear, so be extra diligent about drying and cleaning here.\n\
\n\
Some jobs belong with a professional: resoling, structural repairs, and \
restoration of expensive or cherished shoes. Quality shoes, properly \
maintained, can last for decades.\n",
    },
    BlogPost {
        slug: "when-to-repair-vs-replace-your-shoes",
        title: "When to Repair vs. Replace Your Shoes",
        excerpt: "Not sure if your worn shoes need repairs or replacement? This guide helps you make the right decision based on various factors.",
        category: "Advice",
        author: "James Thompson",
        published: "2025-05-05",
        read_minutes: 7,
        body: "\
# When to Repair vs. Replace Your Shoes\n\
\n\
The repair-or-replace question usually comes down to construction and \
condition. Shoes with welted or stitched construction are built to be \
rebuilt: a worn sole or heel on a quality pair is routine work for any \
cobbler, and the repair will usually cost far less than a comparable new \
pair. Cemented construction is harder to save, and once the upper cracks \
or the structure collapses, replacement is often the honest answer.\n\
\n\
A good rule of thumb: if the upper is sound and the shoe fits well, \
repair it. If the repair quote approaches the price of new shoes you \
would actually be happy with, weigh the craftsmanship you would be giving \
up. Most Florida repair shops offer free evaluations, so ask before you \
decide.\n\
\n\
Do not forget the environmental side of the ledger. Every resoled pair is \
one less pair in a landfill, which tilts close calls toward repair.\n",
    },
    BlogPost {
        slug: "the-art-of-cobbling-floridas-shoe-repair-experts",
        title: "The Art of Cobbling: Florida's Shoe Repair Experts",
        excerpt: "Meet the skilled artisans who are keeping the traditional craft of shoe repair alive across Florida and preserving this valuable skill.",
        category: "Feature",
        author: "Elena Vasquez",
        published: "2025-04-28",
        read_minutes: 8,
        body: "\
# The Art of Cobbling: Florida's Shoe Repair Experts\n\
\n\
Cobbling is one of the oldest trades still practiced on Florida main \
streets, and the people behind the counters are often second- or \
third-generation craftsmen. Many learned at a parent's bench, hand \
stitching welts and shaping heels long before they could drive.\n\
\n\
The shops in our directory tell that story. From downtown Tampa \
storefronts operating since the 1970s to Central Avenue benches in St. \
Petersburg, these artisans combine old equipment, old techniques, and an \
eye for leather that no factory line can match. Their work spans far more \
than shoes: belts, bags, luggage, and the occasional saddle all cross the \
bench.\n\
\n\
The craft faces a real succession problem, with fewer apprentices \
entering each year. Supporting your local cobbler is the most direct way \
to keep the skill alive.\n",
    },
    BlogPost {
        slug: "best-shoe-materials-for-florida-climate",
        title: "Best Shoe Materials for Florida Climate",
        excerpt: "Discover which shoe materials hold up best in Florida's hot, humid climate and how proper care can extend their lifespan.",
        category: "Tips",
        author: "David Chen",
        published: "2025-04-21",
        read_minutes: 6,
        body: "\
# Best Shoe Materials for Florida Climate\n\
\n\
Heat, humidity, sudden downpours, and salt air make Florida one of the \
hardest climates in the country on footwear. Full-grain leather remains a \
strong choice if you condition it regularly and let pairs rest between \
wears; it breathes better than synthetics and takes protective treatments \
well. Suede and nubuck struggle here: they absorb moisture and are slow \
to recover from a soaking.\n\
\n\
For wet-season daily wear, look to treated leathers, quality canvas, and \
modern mesh that drains and dries quickly. Rubber soles outlast leather \
soles on hot, wet pavement, and a cobbler can add rubber protection to \
any leather-soled pair.\n\
\n\
Whatever the material, the care routine matters more than the label: dry \
shoes fully, store them ventilated, and treat them before the damage \
rather than after.\n",
    },
    BlogPost {
        slug: "diy-shoe-repair-tips-every-floridian-should-know",
        title: "DIY Shoe Repair Tips Every Floridian Should Know",
        excerpt: "Learn simple at-home repairs for common shoe problems before deciding to visit a professional cobbler.",
        category: "DIY",
        author: "Maria Rodriguez",
        published: "2025-04-14",
        read_minutes: 9,
        body: "\
# DIY Shoe Repair Tips Every Floridian Should Know\n\
\n\
Plenty of small shoe problems never need a professional. A separating \
sole edge can be reattached with a proper shoe adhesive and twenty-four \
hours under clamps. Scuffed leather responds to matching cream polish \
worked in with a soft cloth. Squeaks often disappear after a little \
talcum powder under the insole, and slightly tight shoes can be eased \
with a wooden stretcher worn in over a few evenings.\n\
\n\
Keep a small kit at home: adhesive, cream polish in your common colors, a \
horsehair brush, spare laces, and waterproofing spray for the summer \
storms.\n\
\n\
Know where the line is. Resoling, heel rebuilds, stitching through \
leather, and anything structural are jobs for a bench with the right \
machines. Attempting them at home usually turns a cheap repair into an \
expensive one, which is exactly when the shops in our directory earn \
their keep.\n",
    },
    BlogPost {
        slug: "sustainable-footwear-repair-and-recycling-options",
        title: "Sustainable Footwear: Repair and Recycling Options",
        excerpt: "Explore how shoe repair contributes to sustainability and learn about eco-friendly options for your worn footwear.",
        category: "Sustainability",
        author: "Sarah Williams",
        published: "2025-04-07",
        read_minutes: 7,
        body: "\
# Sustainable Footwear: Repair and Recycling Options\n\
\n\
Hundreds of millions of pairs of shoes end up in American landfills each \
year, and most of them could have been repaired, donated, or recycled \
instead. Repair is the most sustainable option by a wide margin: a \
resole uses a fraction of the material and energy of a new pair and \
keeps quality uppers in service for years.\n\
\n\
When a pair truly is beyond saving, look for textile recycling programs \
and athletic-shoe take-back schemes that grind soles into playground and \
track surfacing. Shoes with wear left in them belong at donation centers \
rather than in the bin.\n\
\n\
Buying better helps too. Repairable construction, natural materials, and \
classic styles keep shoes out of the waste stream in the first place, \
and your local cobbler can tell you at a glance whether a pair is built \
to be rebuilt.\n",
    },
];
