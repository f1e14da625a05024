//! Hard-coded dashboard data.
//!
//! The stat tiles, weekly chart, leaderboard and achievements are static
//! this release; only the live card is fed by the sensor link.

/// The two stat tiles at the top of the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct TodayStats {
    pub slouch_alerts: u32,
    pub alerts_delta_from_yesterday: i32,
    pub streak_days: u32,
}

pub fn today_stats() -> TodayStats {
    TodayStats {
        slouch_alerts: 8,
        alerts_delta_from_yesterday: -4,
        streak_days: 6,
    }
}

/// One bar of the weekly progress chart.
#[derive(Debug, Clone, Copy)]
pub struct DayProgress {
    pub day: &'static str,
    pub percentage: u8,
}

pub const WEEKLY_PROGRESS: [DayProgress; 7] = [
    DayProgress { day: "Mon", percentage: 78 },
    DayProgress { day: "Tue", percentage: 82 },
    DayProgress { day: "Wed", percentage: 75 },
    DayProgress { day: "Thu", percentage: 88 },
    DayProgress { day: "Fri", percentage: 85 },
    DayProgress { day: "Sat", percentage: 90 },
    DayProgress { day: "Sun", percentage: 82 },
];

/// Hours of tracking logged this week.
pub const HOURS_TRACKED_THIS_WEEK: u32 = 42;

/// Mean of the week's percentages, rounded half away from zero.
pub fn weekly_average() -> u8 {
    let sum: u32 = WEEKLY_PROGRESS.iter().map(|d| d.percentage as u32).sum();
    (sum as f64 / WEEKLY_PROGRESS.len() as f64).round() as u8
}

/// The best day of the week.
pub fn best_day() -> DayProgress {
    let mut best = WEEKLY_PROGRESS[0];
    for day in &WEEKLY_PROGRESS[1..] {
        if day.percentage > best.percentage {
            best = *day;
        }
    }
    best
}

/// A row in the weekly leaderboard.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub score: u8,
    pub initials: &'static str,
    pub is_current_user: bool,
}

pub const WEEKLY_LEADERBOARD: [LeaderboardEntry; 6] = [
    LeaderboardEntry { rank: 1, name: "Kaitlyn", score: 94, initials: "KM", is_current_user: false },
    LeaderboardEntry { rank: 2, name: "Sophie", score: 88, initials: "SL", is_current_user: false },
    LeaderboardEntry { rank: 3, name: "Kevin", score: 82, initials: "KW", is_current_user: false },
    LeaderboardEntry { rank: 4, name: "Lina", score: 76, initials: "LR", is_current_user: true },
    LeaderboardEntry { rank: 5, name: "Aria", score: 72, initials: "AC", is_current_user: false },
    LeaderboardEntry { rank: 6, name: "Marcus", score: 68, initials: "MJ", is_current_user: false },
];

/// A row in the "worst slouchers" hall of shame.
#[derive(Debug, Clone, Copy)]
pub struct SloucherEntry {
    pub rank: u32,
    pub name: &'static str,
    pub score: u8,
    pub initials: &'static str,
    pub tag: &'static str,
}

pub const WORST_SLOUCHERS: [SloucherEntry; 3] = [
    SloucherEntry { rank: 1, name: "Tyler", score: 32, initials: "TM", tag: "Certified Pretzel 🥨" },
    SloucherEntry { rank: 2, name: "Brandon", score: 28, initials: "BC", tag: "Chair Potato 🪑" },
    SloucherEntry { rank: 3, name: "Jake", score: 24, initials: "JR", tag: "Neckflix Binger 📺" },
];

/// A line in the friends activity feed.
#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub emoji: &'static str,
    pub text: &'static str,
}

pub const ACTIVITY_FEED: [Activity; 3] = [
    Activity { emoji: "🔥", text: "Sophie hit a 5-day streak!" },
    Activity { emoji: "💪", text: "Kevin improved his posture by 12%!" },
    Activity { emoji: "🎉", text: "Aria unlocked 'Perfect Posture Day!'" },
];

/// Medal emoji for a podium rank.
pub fn medal(rank: u32) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

/// An entry in the achievements grid.
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub label: &'static str,
    pub unlocked: bool,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { label: "7 Day Streak", unlocked: true },
    Achievement { label: "Perfect Week", unlocked: true },
    Achievement { label: "100 Hours", unlocked: false },
    Achievement { label: "30 Day Master", unlocked: false },
];
