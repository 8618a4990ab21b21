//! Permission scopes published by the EVE Online SSO.

/// Read your account subscription status.
pub const CHARACTER_ACCOUNT_READ: &str = "characterAccountRead";
/// Read your asset list.
pub const CHARACTER_ASSETS_READ: &str = "characterAssetsRead";
/// List your bookmarks and their coordinates.
pub const CHARACTER_BOOKMARKS_READ: &str = "characterBookmarksRead";
/// Read your calendar events and attendees.
pub const CHARACTER_CALENDAR_READ: &str = "characterCalendarRead";
/// List chat channels you own or operate.
pub const CHARACTER_CHAT_CHANNELS_READ: &str = "characterChatChannelsRead";
/// List your jump clones, implants, attributes, and jump fatigue timer.
pub const CHARACTER_CLONES_READ: &str = "characterClonesRead";
/// Read your character's contacts.
pub const CHARACTER_CONTACTS_READ: &str = "characterContactsRead";
/// Add, modify, and delete contacts for your character.
pub const CHARACTER_CONTACTS_WRITE: &str = "characterContactsWrite";
/// Read your contracts.
pub const CHARACTER_CONTRACTS_READ: &str = "characterContractsRead";
/// Read your factional warfare statistics.
pub const CHARACTER_FACTIONAL_WARFARE_READ: &str = "characterFactionalWarfareRead";
/// View all of your character's saved fits.
pub const CHARACTER_FITTINGS_READ: &str = "characterFittingsRead";
/// Create and delete the saved fits for your character.
pub const CHARACTER_FITTINGS_WRITE: &str = "characterFittingsWrite";
/// List your industry jobs.
pub const CHARACTER_INDUSTRY_JOBS_READ: &str = "characterIndustryJobsRead";
/// Read your kill mails.
pub const CHARACTER_KILLS_READ: &str = "characterKillsRead";
/// Read your character's real time location in EVE.
pub const CHARACTER_LOCATION_READ: &str = "characterLocationRead";
/// List loyalty points your character has for the different corporations.
pub const CHARACTER_LOYALTY_POINTS_READ: &str = "characterLoyaltyPointsRead";
/// Read your EVE Mail.
pub const CHARACTER_MAIL_READ: &str = "characterMailRead";
/// Read your market orders.
pub const CHARACTER_MARKET_ORDERS_READ: &str = "characterMarketOrdersRead";
/// List your public and private medals.
pub const CHARACTER_MEDALS_READ: &str = "characterMedalsRead";
/// Set your ship's autopilot destination.
pub const CHARACTER_NAVIGATION_WRITE: &str = "characterNavigationWrite";
/// Receive in-game notifications.
pub const CHARACTER_NOTIFICATIONS_READ: &str = "characterNotificationsRead";
/// List the opportunities your character has completed.
pub const CHARACTER_OPPORTUNITIES_READ: &str = "characterOpportunitiesRead";
/// List your research agents working for you and research progress.
pub const CHARACTER_RESEARCH_READ: &str = "characterResearchRead";
/// Read your skills and skill queue.
pub const CHARACTER_SKILLS_READ: &str = "characterSkillsRead";
/// Yearly aggregated stats about your character.
pub const CHARACTER_STATS_READ: &str = "characterStatsRead";
/// Read your wallet status, transaction, and journal history.
pub const CHARACTER_WALLET_READ: &str = "characterWalletRead";
/// Read your corporation's asset list.
pub const CORPORATION_ASSET_READ: &str = "corporationAssetRead";
/// List your corporation's bookmarks and their coordinates.
pub const CORPORATION_BOOKMARKS_READ: &str = "corporationBookmarksRead";
/// List your corporation's contracts.
pub const CORPORATION_CONTRACTS_READ: &str = "corporationContractsRead";
/// Read your corporation's factional warfare statistics.
pub const CORPORATION_FACTIONAL_WARFARE_READ: &str = "corporationFactionalWarfareRead";
/// List your corporation's industry jobs.
pub const CORPORATION_INDUSTRY_JOBS_READ: &str = "corporationIndustryJobsRead";
/// Read your corporation's kill mails.
pub const CORPORATION_KILLS_READ: &str = "corporationKillsRead";
/// List your corporation's market orders.
pub const CORPORATION_MARKET_ORDERS_READ: &str = "corporationMarketOrdersRead";
/// List your corporation's issued medals.
pub const CORPORATION_MEDALS_READ: &str = "corporationMedalsRead";
/// List your corporation's members, their titles, and roles.
pub const CORPORATION_MEMBERS_READ: &str = "corporationMembersRead";
/// List your corporation's shareholders and their shares.
pub const CORPORATION_SHAREHOLDERS_READ: &str = "corporationShareholdersRead";
/// List your corporation's structures, outposts, and starbases.
pub const CORPORATION_STRUCTURES_READ: &str = "corporationStructuresRead";
/// Read your corporation's wallet status, transaction, and journal history.
pub const CORPORATION_WALLET_READ: &str = "corporationWalletRead";
/// Real time reading of your fleet information if you're the fleet boss.
pub const FLEET_READ: &str = "fleetRead";
/// Invite, kick, and update fleet information if you're the fleet boss.
pub const FLEET_WRITE: &str = "fleetWrite";
/// Access to public data.
pub const PUBLIC_DATA: &str = "publicData";
/// Update your structures' vulnerability timers.
pub const STRUCTURE_VULN_UPDATE: &str = "structureVulnUpdate";

/// Every scope the SSO accepts
pub const ALL: &[&str] = &[
    CHARACTER_ACCOUNT_READ,
    CHARACTER_ASSETS_READ,
    CHARACTER_BOOKMARKS_READ,
    CHARACTER_CALENDAR_READ,
    CHARACTER_CHAT_CHANNELS_READ,
    CHARACTER_CLONES_READ,
    CHARACTER_CONTACTS_READ,
    CHARACTER_CONTACTS_WRITE,
    CHARACTER_CONTRACTS_READ,
    CHARACTER_FACTIONAL_WARFARE_READ,
    CHARACTER_FITTINGS_READ,
    CHARACTER_FITTINGS_WRITE,
    CHARACTER_INDUSTRY_JOBS_READ,
    CHARACTER_KILLS_READ,
    CHARACTER_LOCATION_READ,
    CHARACTER_LOYALTY_POINTS_READ,
    CHARACTER_MAIL_READ,
    CHARACTER_MARKET_ORDERS_READ,
    CHARACTER_MEDALS_READ,
    CHARACTER_NAVIGATION_WRITE,
    CHARACTER_NOTIFICATIONS_READ,
    CHARACTER_OPPORTUNITIES_READ,
    CHARACTER_RESEARCH_READ,
    CHARACTER_SKILLS_READ,
    CHARACTER_STATS_READ,
    CHARACTER_WALLET_READ,
    CORPORATION_ASSET_READ,
    CORPORATION_BOOKMARKS_READ,
    CORPORATION_CONTRACTS_READ,
    CORPORATION_FACTIONAL_WARFARE_READ,
    CORPORATION_INDUSTRY_JOBS_READ,
    CORPORATION_KILLS_READ,
    CORPORATION_MARKET_ORDERS_READ,
    CORPORATION_MEDALS_READ,
    CORPORATION_MEMBERS_READ,
    CORPORATION_SHAREHOLDERS_READ,
    CORPORATION_STRUCTURES_READ,
    CORPORATION_WALLET_READ,
    FLEET_READ,
    FLEET_WRITE,
    PUBLIC_DATA,
    STRUCTURE_VULN_UPDATE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_scopes_are_unique() {
        let unique: HashSet<_> = ALL.iter().collect();
        assert_eq!(unique.len(), ALL.len());
        assert_eq!(ALL.len(), 42);
    }

    #[test]
    fn test_scope_literals() {
        assert_eq!(CHARACTER_ASSETS_READ, "characterAssetsRead");
        assert_eq!(PUBLIC_DATA, "publicData");
        assert!(ALL.contains(&STRUCTURE_VULN_UPDATE));
    }
}
