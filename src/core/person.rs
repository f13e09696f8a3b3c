/// Matchmaking node for one roster entry during a single run
#[derive(Debug, Clone)]
pub struct Person {
    /// Index into the run's roster
    pub identity: usize,
    /// Arena indices, most preferred first
    pub preferences: Vec<usize>,
    /// Arena index of the current partner
    pub fiance: Option<usize>,
    next_proposal: usize,
}

impl Person {
    fn new(identity: usize) -> Self {
        Self {
            identity,
            preferences: Vec::new(),
            fiance: None,
            next_proposal: 0,
        }
    }
}

/// Owns every [`Person`] of a run; references between people are indices.
///
/// Engagements are always written to both sides, so `fiance` is symmetric
/// whenever control is outside of [`PersonArena::engage`].
#[derive(Debug, Clone, Default)]
pub struct PersonArena {
    people: Vec<Person>,
    // rank[r][p] = position of p in r's preferences
    rank: Vec<Vec<usize>>,
}

impl PersonArena {
    /// One person per roster index, in the order given
    pub fn new(identities: impl IntoIterator<Item = usize>) -> Self {
        let people: Vec<Person> = identities.into_iter().map(Person::new).collect();
        let rank = vec![Vec::new(); people.len()];
        Self { people, rank }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, index: usize) -> &Person {
        &self.people[index]
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Assign a preference list and reset the proposal cursor
    pub fn set_preferences(&mut self, index: usize, preferences: Vec<usize>) {
        let mut rank = vec![usize::MAX; self.people.len()];
        for (position, &other) in preferences.iter().enumerate() {
            rank[other] = position;
        }
        self.rank[index] = rank;

        let person = &mut self.people[index];
        person.preferences = preferences;
        person.next_proposal = 0;
    }

    pub fn fiance(&self, index: usize) -> Option<usize> {
        self.people[index].fiance
    }

    /// Position of `other` in `index`'s preferences; unknown people rank last
    pub fn rank_of(&self, index: usize, other: usize) -> usize {
        self.rank[index].get(other).copied().unwrap_or(usize::MAX)
    }

    /// True when `index` ranks `candidate` above its current partner
    pub fn prefers(&self, index: usize, candidate: usize, current: usize) -> bool {
        self.rank_of(index, candidate) < self.rank_of(index, current)
    }

    /// Next unvisited candidate for a proposer, advancing its cursor
    pub fn next_candidate(&mut self, index: usize) -> Option<usize> {
        let person = &mut self.people[index];
        let candidate = person.preferences.get(person.next_proposal).copied()?;
        person.next_proposal += 1;
        Some(candidate)
    }

    /// Engage two free people to each other
    pub fn engage(&mut self, a: usize, b: usize) {
        self.people[a].fiance = Some(b);
        self.people[b].fiance = Some(a);
    }

    /// Free a person and its partner; returns the former partner
    pub fn break_engagement(&mut self, index: usize) -> Option<usize> {
        let partner = self.people[index].fiance.take()?;
        self.people[partner].fiance = None;
        Some(partner)
    }
}
