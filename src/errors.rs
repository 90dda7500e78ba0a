use std::fmt;

/// Main error type for the Pokemon team builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamBuilderError {
    /// Error related to Pokemon data lookup
    DataProvider(DataProviderError),
    /// Error related to team slot management
    Team(TeamError),
}

/// Errors related to Pokemon data provider operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataProviderError {
    /// The specified Pokemon id was not found by the provider
    PokemonNotFound(u16),
    /// The Pokemon id is outside the known catalog range
    InvalidPokemonId(u16),
    /// Provider data is malformed or incomplete
    MalformedData(String),
}

/// Errors related to team slot management
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// Slot position is outside the fixed six-slot range
    InvalidPosition(usize),
    /// All six slots are already occupied
    TeamFull,
    /// Team name is empty or whitespace-only
    EmptyTeamName,
}

impl fmt::Display for TeamBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamBuilderError::DataProvider(err) => write!(f, "Data provider error: {}", err),
            TeamBuilderError::Team(err) => write!(f, "Team error: {}", err),
        }
    }
}

impl fmt::Display for DataProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataProviderError::PokemonNotFound(id) => write!(f, "Pokemon not found: {}", id),
            DataProviderError::InvalidPokemonId(id) => write!(f, "Invalid Pokemon id: {}", id),
            DataProviderError::MalformedData(details) => {
                write!(f, "Malformed Pokemon data: {}", details)
            }
        }
    }
}

impl fmt::Display for TeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamError::InvalidPosition(position) => {
                write!(f, "Invalid team position: {}", position)
            }
            TeamError::TeamFull => write!(f, "Team already has six Pokemon"),
            TeamError::EmptyTeamName => write!(f, "Team name must not be empty"),
        }
    }
}

impl std::error::Error for TeamBuilderError {}
impl std::error::Error for DataProviderError {}
impl std::error::Error for TeamError {}

impl From<DataProviderError> for TeamBuilderError {
    fn from(err: DataProviderError) -> Self {
        TeamBuilderError::DataProvider(err)
    }
}

impl From<TeamError> for TeamBuilderError {
    fn from(err: TeamError) -> Self {
        TeamBuilderError::Team(err)
    }
}

/// Type alias for Results using TeamBuilderError
pub type TeamBuilderResult<T> = Result<T, TeamBuilderError>;

/// Type alias for Results using DataProviderError
pub type DataProviderResult<T> = Result<T, DataProviderError>;

/// Type alias for Results using TeamError
pub type TeamResult<T> = Result<T, TeamError>;
