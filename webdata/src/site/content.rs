use crate::site::i18n::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Education,
    Health,
    Social,
    Economic,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Education, Category::Health, Category::Social, Category::Economic];

    pub fn id(self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Health => "health",
            Category::Social => "social",
            Category::Economic => "economic",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn label(self) -> Bilingual {
        match self {
            Category::Education => Bilingual::new("Education", "শিক্ষা"),
            Category::Health => Bilingual::new("Health", "স্বাস্থ্য"),
            Category::Social => Bilingual::new("Social", "সামাজিক"),
            Category::Economic => Bilingual::new("Economic", "অর্থনৈতিক"),
        }
    }

    /// Accent colour token used by the stylesheet.
    pub fn color(self) -> &'static str {
        match self {
            Category::Education => "primary",
            Category::Health => "secondary-teal",
            Category::Social => "secondary-orange",
            Category::Economic => "secondary-pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video { embed_url: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    pub id: u32,
    pub kind: MediaKind,
    /// Image, or thumbnail for videos.
    pub src: &'static str,
    pub title: Bilingual,
    pub description: Bilingual,
    pub category: Category,
    pub date: &'static str,
}

impl MediaItem {
    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video { .. })
    }
}

pub const EDUCATION_IMG: &str = "/assets/hero/education.jpeg";
pub const COMMUNITY_IMG: &str = "/assets/hero/photo-2024-06-09.jpg";
pub const SOCIAL_IMG: &str = "/assets/hero/photo-2024-10-01.jpg";
pub const TAILOR_IMG: &str = "/assets/hero/tailor-machine.png";
pub const ABOUT_VIDEO: &str = "https://www.youtube.com/embed/DWB6Bzk9IuQ";

pub const MEDIA: [MediaItem; 6] = [
    MediaItem {
        id: 1,
        kind: MediaKind::Photo,
        src: EDUCATION_IMG,
        title: Bilingual::new("Education Program", "শিক্ষা কার্যক্রম"),
        description: Bilingual::new("A moment from our preschool education program", "প্রিস্কুল শিক্ষা কার্যক্রমের একটি মুহূর্ত"),
        category: Category::Education,
        date: "2024-10-15",
    },
    MediaItem {
        id: 2,
        kind: MediaKind::Photo,
        src: COMMUNITY_IMG,
        title: Bilingual::new("Community Development", "সম্প্রদায় উন্নয়ন"),
        description: Bilingual::new("Discussion with community members", "কমিউনিটি সদস্যদের সাথে আলোচনা"),
        category: Category::Social,
        date: "2024-06-09",
    },
    MediaItem {
        id: 3,
        kind: MediaKind::Photo,
        src: SOCIAL_IMG,
        title: Bilingual::new("Social Activities", "সামাজিক কার্যক্রম"),
        description: Bilingual::new("Social engagement activities", "সামাজিক সম্পৃক্ততা কার্যক্রম"),
        category: Category::Social,
        date: "2024-10-01",
    },
    MediaItem {
        id: 4,
        kind: MediaKind::Photo,
        src: TAILOR_IMG,
        title: Bilingual::new("Skills Development", "দক্ষতা উন্নয়ন"),
        description: Bilingual::new("Tailoring training program", "সেলাই প্রশিক্ষণ কার্যক্রম"),
        category: Category::Economic,
        date: "2024-09-20",
    },
    MediaItem {
        id: 5,
        kind: MediaKind::Video { embed_url: ABOUT_VIDEO },
        src: EDUCATION_IMG,
        title: Bilingual::new("Community Center Inauguration", "কমিউনিটি সেন্টার উদ্বোধন"),
        description: Bilingual::new("Vogdaburi Community Center inauguration ceremony", "ভোগদাবুরি কমিউনিটি সেন্টারের উদ্বোধনী অনুষ্ঠান"),
        category: Category::Social,
        date: "2025-02-01",
    },
    MediaItem {
        id: 6,
        kind: MediaKind::Photo,
        src: COMMUNITY_IMG,
        title: Bilingual::new("Health Camp", "স্বাস্থ্য ক্যাম্প"),
        description: Bilingual::new("Monthly health checkup program", "মাসিক স্বাস্থ্য পরীক্ষা কার্যক্রম"),
        category: Category::Health,
        date: "2024-11-05",
    },
];

pub struct HeroSlide {
    pub src: &'static str,
    pub title: Bilingual,
    pub description: Bilingual,
}

pub const HERO_SLIDES: [HeroSlide; 4] = [
    HeroSlide {
        src: EDUCATION_IMG,
        title: Bilingual::new("Education Program", "শিক্ষা কার্যক্রম"),
        description: Bilingual::new("Building futures through quality education", "মানসম্মত শিক্ষার মাধ্যমে ভবিষ্যৎ গড়ে তুলি"),
    },
    HeroSlide {
        src: COMMUNITY_IMG,
        title: Bilingual::new("Community Development", "সম্প্রদায় উন্নয়ন"),
        description: Bilingual::new("Working together for prosperity", "একসাথে কাজ করে সমৃদ্ধি আনি"),
    },
    HeroSlide {
        src: SOCIAL_IMG,
        title: Bilingual::new("Social Activities", "সামাজিক কার্যক্রম"),
        description: Bilingual::new("Active participation in social development", "সমাজের উন্নয়নে সক্রিয় অংশগ্রহণ"),
    },
    HeroSlide {
        src: TAILOR_IMG,
        title: Bilingual::new("Skill Development", "দক্ষতা উন্নয়ন"),
        description: Bilingual::new("Building self-reliance through skill development", "পেশাগত দক্ষতা বৃদ্ধির মাধ্যমে আত্মনির্ভরশীলতা"),
    },
];

pub struct Program {
    pub category: Category,
    pub title: Bilingual,
    pub description: Bilingual,
    pub features: &'static [Bilingual],
}

pub const PROGRAMS: [Program; 4] = [
    Program {
        category: Category::Education,
        title: Bilingual::new("Education", "শিক্ষা"),
        description: Bilingual::new(
            "Preschool classes and tutoring that give every child a strong start.",
            "প্রিস্কুল ক্লাস ও টিউটরিং যা প্রতিটি শিশুকে শক্ত ভিত্তি দেয়।",
        ),
        features: &[
            Bilingual::new("Preschool education", "প্রিস্কুল শিক্ষা"),
            Bilingual::new("After-school tutoring", "স্কুল পরবর্তী টিউটরিং"),
            Bilingual::new("Digital literacy", "ডিজিটাল সাক্ষরতা"),
        ],
    },
    Program {
        category: Category::Health,
        title: Bilingual::new("Health", "স্বাস্থ্য"),
        description: Bilingual::new(
            "Monthly health camps and awareness sessions for families.",
            "পরিবারের জন্য মাসিক স্বাস্থ্য ক্যাম্প ও সচেতনতা কার্যক্রম।",
        ),
        features: &[
            Bilingual::new("Free checkups", "বিনামূল্যে স্বাস্থ্য পরীক্ষা"),
            Bilingual::new("Hygiene awareness", "স্বাস্থ্যবিধি সচেতনতা"),
        ],
    },
    Program {
        category: Category::Social,
        title: Bilingual::new("Social", "সামাজিক"),
        description: Bilingual::new(
            "A community center where neighbours meet, learn and organise.",
            "একটি কমিউনিটি সেন্টার যেখানে প্রতিবেশীরা একসাথে শেখে ও কাজ করে।",
        ),
        features: &[
            Bilingual::new("Community meetings", "কমিউনিটি সভা"),
            Bilingual::new("Cultural events", "সাংস্কৃতিক অনুষ্ঠান"),
        ],
    },
    Program {
        category: Category::Economic,
        title: Bilingual::new("Economic", "অর্থনৈতিক"),
        description: Bilingual::new(
            "Skills training that leads to self-reliant livelihoods.",
            "দক্ষতা প্রশিক্ষণ যা আত্মনির্ভরশীল জীবিকার পথ খুলে দেয়।",
        ),
        features: &[
            Bilingual::new("Tailoring training", "সেলাই প্রশিক্ষণ"),
            Bilingual::new("Small business support", "ক্ষুদ্র ব্যবসা সহায়তা"),
        ],
    },
];

pub struct Activity {
    pub title: Bilingual,
    pub description: Bilingual,
    pub location: Bilingual,
    pub schedule: Bilingual,
    pub participants: u32,
    pub category: Bilingual,
    pub color: &'static str,
}

const VOGDABURI_CENTER: Bilingual = Bilingual::new("Vogdaburi Community Center", "ভোগদাবুরি কমিউনিটি সেন্টার");

pub const ACTIVITIES: [Activity; 5] = [
    Activity {
        title: Bilingual::new("Preschool Education Program", "প্রিস্কুল শিক্ষা কার্যক্রম"),
        description: Bilingual::new("73 children receive quality early education daily", "প্রতিদিন ৭৩ জন শিশুকে মানসম্মত প্রাথমিক শিক্ষা প্রদান করা হচ্ছে"),
        location: VOGDABURI_CENTER,
        schedule: Bilingual::new("Sunday - Wednesday, 8:00 AM - 10:00 AM", "রবিবার - বুধবার, সকাল ৮টা - সকাল ১০টা"),
        participants: 73,
        category: Bilingual::new("Education", "শিক্ষা"),
        color: "primary",
    },
    Activity {
        title: Bilingual::new("Tutoring Program", "টিউটরিং প্রোগ্রাম"),
        description: Bilingual::new("Specialized academic support for student improvement", "শিক্ষার্থীদের একাডেমিক উন্নতির জন্য বিশেষ সহায়তা প্রদান"),
        location: VOGDABURI_CENTER,
        schedule: Bilingual::new("Saturday - Wednesday, 4:00 PM - 6:00 PM", "শনিবার - বুধবার, বিকাল ৪টা - সন্ধ্যা ৬টা"),
        participants: 57,
        category: Bilingual::new("Education", "শিক্ষা"),
        color: "secondary-teal",
    },
    Activity {
        title: Bilingual::new("Digital Literacy Training", "ডিজিটাল সাক্ষরতা প্রশিক্ষণ"),
        description: Bilingual::new("Computer and internet skills training for youth", "যুবকদের জন্য কম্পিউটার এবং ইন্টারনেট ব্যবহার প্রশিক্ষণ"),
        location: Bilingual::new("Computer Lab, Vogdaburi", "কম্পিউটার ল্যাব, ভোগদাবুরি"),
        schedule: Bilingual::new("Saturday - Thursday, 10:00 AM - 5:00 PM", "শনি - বৃহস্পতিবার, সকাল ১০টা - বিকাল ৫টা"),
        participants: 25,
        category: Bilingual::new("Digital", "ডিজিটাল"),
        color: "secondary-orange",
    },
    Activity {
        title: Bilingual::new("Community Health Camp", "কমিউনিটি স্বাস্থ্য ক্যাম্প"),
        description: Bilingual::new("Monthly health checkups and awareness programs", "মাসিক স্বাস্থ্য পরীক্ষা এবং সচেতনতা কার্যক্রম"),
        location: VOGDABURI_CENTER,
        schedule: Bilingual::new("First Friday of every month", "প্রতি মাসের প্রথম শুক্রবার"),
        participants: 120,
        category: Bilingual::new("Health", "স্বাস্থ্য"),
        color: "secondary-pink",
    },
    Activity {
        title: Bilingual::new("Tailoring Training", "সেলাই প্রশিক্ষণ"),
        description: Bilingual::new("Sewing skills for women's self-employment", "নারীদের আত্মকর্মসংস্থানের জন্য সেলাই দক্ষতা"),
        location: VOGDABURI_CENTER,
        schedule: Bilingual::new("Sunday - Thursday, 2:00 PM - 4:00 PM", "রবিবার - বৃহস্পতিবার, দুপুর ২টা - বিকাল ৪টা"),
        participants: 18,
        category: Bilingual::new("Economic", "অর্থনৈতিক"),
        color: "secondary-pink",
    },
];

pub struct ImpactMetric {
    pub value: &'static str,
    pub label: Bilingual,
}

pub const IMPACT_METRICS: [ImpactMetric; 4] = [
    ImpactMetric { value: "173+", label: Bilingual::new("Children Educated", "শিশু শিক্ষা পেয়েছে") },
    ImpactMetric { value: "500+", label: Bilingual::new("Families Reached", "পরিবার উপকৃত") },
    ImpactMetric { value: "25+", label: Bilingual::new("Youth Trained", "যুবক প্রশিক্ষিত") },
    ImpactMetric { value: "12", label: Bilingual::new("Health Camps", "স্বাস্থ্য ক্যাম্প") },
];

pub fn total_participants() -> u32 {
    ACTIVITIES.iter().map(|a| a.participants).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_ids_are_unique() {
        let mut ids: Vec<u32> = MEDIA.iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), MEDIA.len());
        assert_eq!(MEDIA.iter().filter(|m| m.is_video()).count(), 1);
    }

    #[test]
    fn category_ids_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_id(c.id()), Some(c));
        }
        assert_eq!(Category::from_id("all"), None);
    }

    #[test]
    fn participants_add_up() {
        assert_eq!(total_participants(), 73 + 57 + 25 + 120 + 18);
    }
}
