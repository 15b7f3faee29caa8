//! Team reference list used for name resolution

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub nickname: String,
    pub full_name: String,
    pub abbreviation: String,
}

impl TeamEntry {
    pub fn new(nickname: &str, full_name: &str, abbreviation: &str) -> Self {
        TeamEntry {
            nickname: nickname.to_string(),
            full_name: full_name.to_string(),
            abbreviation: abbreviation.to_string(),
        }
    }

    /// Case-insensitive: abbreviation equals, or query is part of the full name or nickname
    pub fn matches_name(&self, query: &str) -> bool {
        self.match_rank(query).is_some()
    }

    /// How closely the query names this team, lower is closer
    ///
    /// 0: abbreviation, 1: whole nickname or full name, 2: prefix of either,
    /// 3: anywhere inside either.
    pub fn match_rank(&self, query: &str) -> Option<u8> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let full_name = self.full_name.to_lowercase();
        let nickname = self.nickname.to_lowercase();

        if self.abbreviation.to_lowercase() == query {
            Some(0)
        } else if full_name == query || nickname == query {
            Some(1)
        } else if full_name.starts_with(&query) || nickname.starts_with(&query) {
            Some(2)
        } else if full_name.contains(&query) || nickname.contains(&query) {
            Some(3)
        } else {
            None
        }
    }
}

/// Known teams, passed to whatever needs to resolve names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamDirectory {
    teams: Vec<TeamEntry>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<TeamEntry>) -> Self {
        TeamDirectory { teams }
    }

    /// All 30 NBA franchises
    pub fn nba() -> Self {
        const TEAMS: [(&str, &str, &str); 30] = [
            ("Hawks", "Atlanta Hawks", "ATL"),
            ("Celtics", "Boston Celtics", "BOS"),
            ("Nets", "Brooklyn Nets", "BKN"),
            ("Hornets", "Charlotte Hornets", "CHA"),
            ("Bulls", "Chicago Bulls", "CHI"),
            ("Cavaliers", "Cleveland Cavaliers", "CLE"),
            ("Mavericks", "Dallas Mavericks", "DAL"),
            ("Nuggets", "Denver Nuggets", "DEN"),
            ("Pistons", "Detroit Pistons", "DET"),
            ("Warriors", "Golden State Warriors", "GSW"),
            ("Rockets", "Houston Rockets", "HOU"),
            ("Pacers", "Indiana Pacers", "IND"),
            ("Clippers", "LA Clippers", "LAC"),
            ("Lakers", "Los Angeles Lakers", "LAL"),
            ("Grizzlies", "Memphis Grizzlies", "MEM"),
            ("Heat", "Miami Heat", "MIA"),
            ("Bucks", "Milwaukee Bucks", "MIL"),
            ("Timberwolves", "Minnesota Timberwolves", "MIN"),
            ("Pelicans", "New Orleans Pelicans", "NOP"),
            ("Knicks", "New York Knicks", "NYK"),
            ("Thunder", "Oklahoma City Thunder", "OKC"),
            ("Magic", "Orlando Magic", "ORL"),
            ("76ers", "Philadelphia 76ers", "PHI"),
            ("Suns", "Phoenix Suns", "PHX"),
            ("Trail Blazers", "Portland Trail Blazers", "POR"),
            ("Kings", "Sacramento Kings", "SAC"),
            ("Spurs", "San Antonio Spurs", "SAS"),
            ("Raptors", "Toronto Raptors", "TOR"),
            ("Jazz", "Utah Jazz", "UTA"),
            ("Wizards", "Washington Wizards", "WAS"),
        ];

        TeamDirectory::new(
            TEAMS
                .iter()
                .map(|(nick, full, abbr)| TeamEntry::new(nick, full, abbr))
                .collect(),
        )
    }

    /// Closest team matching the query; list order breaks ties
    pub fn find(&self, query: &str) -> Option<&TeamEntry> {
        self.teams
            .iter()
            .filter_map(|t| t.match_rank(query).map(|rank| (rank, t)))
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, t)| t)
    }

    pub fn teams(&self) -> &[TeamEntry] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nba_directory() {
        let dir = TeamDirectory::nba();
        assert_eq!(dir.len(), 30);
    }

    #[test]
    fn test_find_by_nickname_city_and_abbreviation() {
        let dir = TeamDirectory::nba();
        assert_eq!(dir.find("lakers").unwrap().abbreviation, "LAL");
        assert_eq!(dir.find("Golden State").unwrap().nickname, "Warriors");
        assert_eq!(dir.find("okc").unwrap().full_name, "Oklahoma City Thunder");
        assert!(dir.find("Sonics").is_none());
        assert!(dir.find("").is_none());
    }

    #[test]
    fn test_abbreviation_beats_substring() {
        let dir = TeamDirectory::nba();
        // "phi" is inside "Memphis", which comes first
        assert_eq!(dir.find("PHI").unwrap().full_name, "Philadelphia 76ers");
        assert_eq!(dir.find("mem").unwrap().full_name, "Memphis Grizzlies");
        assert_eq!(dir.find("LAC").unwrap().full_name, "LA Clippers");
    }

    #[test]
    fn test_prefix_beats_substring() {
        let dir = TeamDirectory::nba();
        // "la" is inside "Atlanta", which comes first
        assert_eq!(dir.find("LA").unwrap().full_name, "LA Clippers");
        assert_eq!(dir.find("Los Angeles").unwrap().full_name, "Los Angeles Lakers");
        assert_eq!(dir.find("blazers").unwrap().abbreviation, "POR");
    }

    #[test]
    fn test_match_rank() {
        let sixers = TeamEntry::new("76ers", "Philadelphia 76ers", "PHI");
        assert_eq!(sixers.match_rank("phi"), Some(0));
        assert_eq!(sixers.match_rank("76ers"), Some(1));
        assert_eq!(sixers.match_rank("Philly"), None);
        assert_eq!(sixers.match_rank("phila"), Some(2));
        assert_eq!(sixers.match_rank("delphia"), Some(3));
        assert_eq!(sixers.match_rank("  "), None);
    }

    #[test]
    fn test_injected_directory() {
        let dir = TeamDirectory::new(vec![TeamEntry::new("Crusaders", "Canterbury Crusaders", "CRU")]);
        assert!(dir.find("crusaders").is_some());
        assert!(dir.find("Lakers").is_none());
    }
}
