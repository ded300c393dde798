// src/infrastructure/csv_loader.rs
//
// Repository population from CSV tables
//
// ORDER MATTERS:
// 1. movies (and the tags found on them)
// 2. users
// 3. reviews, which reference both
//
// Every table has a header row, which is skipped. Columns are positional.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use thiserror::Error;

use crate::domain::{
    make_review, make_tag_association, validate_movie, validate_user, Actor, Director,
    DomainError, Movie, MovieId, ReleaseYear, Tag, User,
};
use crate::infrastructure::password::hash_password;
use crate::repositories::{Repository, RepositoryError};

pub const MOVIES_FILE: &str = "movies.csv";
pub const USERS_FILE: &str = "users.csv";
pub const REVIEWS_FILE: &str = "reviews.csv";

/// Index of the first tag column in the movies table
const FIRST_TAG_COLUMN: usize = 7;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{file} line {line}: missing column '{column}'")]
    MissingColumn {
        file: &'static str,
        line: u64,
        column: &'static str,
    },

    #[error("{file} line {line}: invalid {column} '{value}'")]
    InvalidField {
        file: &'static str,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("{file} line {line}: review refers to unknown user '{external_id}'")]
    UnknownUser {
        file: &'static str,
        line: u64,
        external_id: String,
    },

    #[error("{file} line {line}: review refers to unknown movie {movie_id}")]
    UnknownMovie {
        file: &'static str,
        line: u64,
        movie_id: MovieId,
    },

    #[error("{file} line {line}: cannot hash password: {message}")]
    Credential {
        file: &'static str,
        line: u64,
        message: String,
    },

    #[error("{file} line {line}: {source}")]
    Domain {
        file: &'static str,
        line: u64,
        #[source]
        source: DomainError,
    },

    #[error("tag '{tag_name}': {source}")]
    Tag {
        tag_name: String,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// What `populate` put into the repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationSummary {
    pub movies: usize,
    pub tags: usize,
    pub users: usize,
    pub reviews: usize,
}

impl std::fmt::Display for PopulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} movies, {} tags, {} users, {} reviews",
            self.movies, self.tags, self.users, self.reviews
        )
    }
}

/// Load all three tables from `data_dir` into `repo`
pub fn populate(data_dir: &Path, repo: &dyn Repository) -> Result<PopulationSummary, LoadError> {
    info!("Populating repository from {}", data_dir.display());

    let (movies, tags) = load_movies_and_tags(data_dir, repo)?;
    let users = load_users(data_dir, repo)?;
    let reviews = load_reviews(data_dir, repo, &users)?;

    let summary = PopulationSummary {
        movies,
        tags,
        users: users.len(),
        reviews,
    };
    info!("Repository populated: {}", summary);
    Ok(summary)
}

/// Add every movie, then every tag found on them
///
/// Returns the number of movies and tags added.
pub fn load_movies_and_tags(
    data_dir: &Path,
    repo: &dyn Repository,
) -> Result<(usize, usize), LoadError> {
    let mut tag_order: Vec<String> = Vec::new();
    let mut tagged: HashMap<String, Vec<MovieId>> = HashMap::new();
    let mut movies = 0;

    for_each_row(data_dir, MOVIES_FILE, |row| {
        let id = MovieId::new(row.parse(0, "id")?);
        let release_year = row.release_year(6)?;

        let mut movie = Movie::new(id, row.field(2, "title")?, release_year)
            .with_description(row.field(3, "description")?)
            .with_actors(Actor::parse_list(row.field(5, "actors")?));
        let director = row.field(4, "director")?;
        if !director.is_empty() {
            movie = movie.with_director(Director::new(director));
        }

        validate_movie(&movie).map_err(|source| row.domain(source))?;
        repo.add_movie(movie)?;
        movies += 1;

        for tag_name in row.trailing(FIRST_TAG_COLUMN) {
            let ids = tagged.entry(tag_name.to_string()).or_insert_with(|| {
                tag_order.push(tag_name.to_string());
                Vec::new()
            });
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(())
    })?;

    for tag_name in &tag_order {
        let mut tag = Tag::new(tag_name);
        for movie in repo.get_movies_by_id(&tagged[tag_name]) {
            make_tag_association(&movie, &mut tag).map_err(|source| LoadError::Tag {
                tag_name: tag_name.clone(),
                source,
            })?;
        }
        debug!("Tag '{}' applied to {} movies", tag.tag_name, tag.number_of_tagged_movies());
        repo.add_tag(tag);
    }

    Ok((movies, tag_order.len()))
}

/// Add every user, hashing the plaintext passwords of the table
///
/// Returns the external user id → stored user name mapping used by the
/// reviews table.
pub fn load_users(
    data_dir: &Path,
    repo: &dyn Repository,
) -> Result<HashMap<String, String>, LoadError> {
    let mut users = HashMap::new();

    for_each_row(data_dir, USERS_FILE, |row| {
        let external_id = row.field(0, "external_id")?;
        let password_hash =
            hash_password(row.field(2, "password")?).map_err(|err| LoadError::Credential {
                file: row.file,
                line: row.line,
                message: err.to_string(),
            })?;

        let user = User::new(row.field(1, "user_name")?, password_hash);
        validate_user(&user).map_err(|source| row.domain(source))?;

        let user_name = user.user_name.clone();
        repo.add_user(user)?;
        users.insert(external_id.to_string(), user_name);
        Ok(())
    })?;

    Ok(users)
}

/// Add every review, linking it to its user and movie first
///
/// Returns the number of reviews added.
pub fn load_reviews(
    data_dir: &Path,
    repo: &dyn Repository,
    users: &HashMap<String, String>,
) -> Result<usize, LoadError> {
    let mut reviews = 0;

    for_each_row(data_dir, REVIEWS_FILE, |row| {
        let external_id = row.field(1, "user_id")?;
        let user = users
            .get(external_id)
            .and_then(|user_name| repo.get_user(user_name))
            .ok_or_else(|| LoadError::UnknownUser {
                file: row.file,
                line: row.line,
                external_id: external_id.to_string(),
            })?;

        let movie_id = MovieId::new(row.parse(2, "movie_id")?);
        let movie = repo.get_movie(movie_id).ok_or(LoadError::UnknownMovie {
            file: row.file,
            line: row.line,
            movie_id,
        })?;

        let timestamp = row.timestamp(4)?;
        let review = make_review(row.field(3, "review_text")?, &user, &movie, timestamp)
            .map_err(|source| row.domain(source))?;

        repo.add_review(review)?;
        reviews += 1;
        Ok(())
    })?;

    Ok(reviews)
}

fn for_each_row<F>(data_dir: &Path, file: &'static str, mut handle: F) -> Result<(), LoadError>
where
    F: FnMut(&Row<'_>) -> Result<(), LoadError>,
{
    let path = data_dir.join(file);
    let csv_error = |source| LoadError::Csv {
        path: path.clone(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(&path)
        .map_err(csv_error)?;

    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        handle(&Row {
            file,
            line,
            record: &record,
        })?;
    }
    Ok(())
}

/// One data row with positional, error-reporting accessors
struct Row<'a> {
    file: &'static str,
    line: u64,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    fn field(&self, index: usize, column: &'static str) -> Result<&str, LoadError> {
        self.record.get(index).ok_or(LoadError::MissingColumn {
            file: self.file,
            line: self.line,
            column,
        })
    }

    fn parse<T: FromStr>(&self, index: usize, column: &'static str) -> Result<T, LoadError> {
        let value = self.field(index, column)?;
        value.parse().map_err(|_| self.invalid(column, value))
    }

    /// A bare year, or a full ISO date whose year is kept
    fn release_year(&self, index: usize) -> Result<ReleaseYear, LoadError> {
        let value = self.field(index, "release_year")?;
        value
            .parse::<u16>()
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| u16::try_from(date.year()).ok())
            })
            .map(ReleaseYear::new)
            .ok_or_else(|| self.invalid("release_year", value))
    }

    fn timestamp(&self, index: usize) -> Result<DateTime<Utc>, LoadError> {
        let value = self.field(index, "timestamp")?;
        parse_timestamp(value).ok_or_else(|| self.invalid("timestamp", value))
    }

    /// Non-empty fields from `start` to the end of the row
    fn trailing(&self, start: usize) -> impl Iterator<Item = &'a str> + 'a {
        self.record
            .iter()
            .skip(start)
            .filter(|value| !value.is_empty())
    }

    fn invalid(&self, column: &'static str, value: &str) -> LoadError {
        LoadError::InvalidField {
            file: self.file,
            line: self.line,
            column,
            value: value.to_string(),
        }
    }

    fn domain(&self, source: DomainError) -> LoadError {
        LoadError::Domain {
            file: self.file,
            line: self.line,
            source,
        }
    }
}

/// RFC 3339, or a naive ISO date-time taken as UTC
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryRepository;
    use std::fs;
    use tempfile::TempDir;

    const MOVIES: &str = "\u{feff}Rank,Genre,Title,Description,Director,Actors,Year,Tag1,Tag2,Tag3
1,x,Guardians of the Galaxy,A group of intergalactic criminals,James Gunn,\"Chris Pratt, Vin Diesel, Bradley Cooper\",2014,Action,Adventure,Sci-Fi
2,x,Prometheus,\"Following clues, a team explores\",Ridley Scott,\"Noomi Rapace, Logan Marshall-Green\",2012,Adventure,Mystery,
3,x,Split,Three girls are kidnapped,M. Night Shyamalan,James McAvoy,2016,Horror,Thriller
4,x,Sing,In a city of humanoid animals,Christophe Lourdelet,Matthew McConaughey,2016,Animation
";

    const USERS: &str = "id,username,password
1,thorke,cLQ^C#oFXloS
2,fmercury,mvNNbc1eLA$i
";

    const REVIEWS: &str = "id,user_id,movie_id,review,timestamp
1,2,1,Oh no sequel please,2020-02-28 14:31:26
2,1,1,Yeah this was fun,2020-02-29 08:12:08
3,1,3,Scary stuff,2020-03-01T10:00:00+00:00
";

    fn data_dir(movies: &str, users: &str, reviews: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MOVIES_FILE), movies).unwrap();
        fs::write(dir.path().join(USERS_FILE), users).unwrap();
        fs::write(dir.path().join(REVIEWS_FILE), reviews).unwrap();
        dir
    }

    #[test]
    fn test_populate_loads_all_tables() {
        let dir = data_dir(MOVIES, USERS, REVIEWS);
        let repo = MemoryRepository::new();

        let summary = populate(dir.path(), &repo).unwrap();

        assert_eq!(
            summary,
            PopulationSummary {
                movies: 4,
                tags: 7,
                users: 2,
                reviews: 3,
            }
        );
        assert_eq!(repo.get_number_of_movies(), 4);
        assert_eq!(repo.get_first_movie().unwrap().title, "Prometheus");
        assert_eq!(repo.get_reviews().len(), 3);
    }

    #[test]
    fn test_movie_columns_are_mapped() {
        let dir = data_dir(MOVIES, USERS, REVIEWS);
        let repo = MemoryRepository::new();
        load_movies_and_tags(dir.path(), &repo).unwrap();

        let movie = repo.get_movie(MovieId::new(1)).unwrap();
        assert_eq!(movie.title, "Guardians of the Galaxy");
        assert_eq!(movie.release_year, ReleaseYear::new(2014));
        assert_eq!(movie.director, Some(Director::new("James Gunn")));
        assert_eq!(movie.actors.len(), 3);
        assert_eq!(movie.actors[1], Actor::new("Vin Diesel"));
        assert_eq!(movie.tags(), vec!["Action", "Adventure", "Sci-Fi"]);

        let prometheus = repo.get_movie(MovieId::new(2)).unwrap();
        assert_eq!(prometheus.description, "Following clues, a team explores");
    }

    #[test]
    fn test_tags_collect_movies_across_rows() {
        let dir = data_dir(MOVIES, USERS, REVIEWS);
        let repo = MemoryRepository::new();
        load_movies_and_tags(dir.path(), &repo).unwrap();

        assert_eq!(
            repo.get_movie_ids_for_tag("Adventure"),
            vec![MovieId::new(1), MovieId::new(2)]
        );
        assert_eq!(repo.get_movie_ids_for_tag("Horror"), vec![MovieId::new(3)]);
        let names: Vec<String> = repo.get_tags().into_iter().map(|t| t.tag_name).collect();
        assert_eq!(names[0], "Action");
        assert!(!names.iter().any(|name| name.is_empty()));
    }

    #[test]
    fn test_users_are_stored_with_hashed_passwords() {
        let dir = data_dir(MOVIES, USERS, REVIEWS);
        let repo = MemoryRepository::new();

        let users = load_users(dir.path(), &repo).unwrap();

        assert_eq!(users.get("1").map(String::as_str), Some("thorke"));
        let user = repo.get_user("thorke").unwrap();
        assert_ne!(user.password_hash, "cLQ^C#oFXloS");
        assert!(crate::infrastructure::verify_password("cLQ^C#oFXloS", &user.password_hash));
    }

    #[test]
    fn test_reviews_are_linked_both_ways() {
        let dir = data_dir(MOVIES, USERS, REVIEWS);
        let repo = MemoryRepository::new();
        populate(dir.path(), &repo).unwrap();

        let guardians = repo.get_movie(MovieId::new(1)).unwrap();
        let fmercury = repo.get_user("fmercury").unwrap();
        assert_eq!(guardians.number_of_reviews(), 2);
        assert_eq!(fmercury.reviews().len(), 1);
        assert_eq!(fmercury.reviews()[0].review_text, "Oh no sequel please");
        assert_eq!(
            fmercury.reviews()[0].timestamp.to_rfc3339(),
            "2020-02-28T14:31:26+00:00"
        );
    }

    #[test]
    fn test_review_for_unknown_user_fails() {
        let reviews = "id,user_id,movie_id,review,timestamp\n1,99,1,Ghost,2020-02-28 14:31:26\n";
        let dir = data_dir(MOVIES, USERS, reviews);
        let repo = MemoryRepository::new();

        let result = populate(dir.path(), &repo);

        assert!(matches!(result, Err(LoadError::UnknownUser { line: 2, .. })));
    }

    #[test]
    fn test_review_for_unknown_movie_fails() {
        let reviews = "id,user_id,movie_id,review,timestamp\n1,1,77,Where,2020-02-28 14:31:26\n";
        let dir = data_dir(MOVIES, USERS, reviews);
        let repo = MemoryRepository::new();

        let result = populate(dir.path(), &repo);

        assert!(matches!(
            result,
            Err(LoadError::UnknownMovie { movie_id, .. }) if movie_id == MovieId::new(77)
        ));
    }

    #[test]
    fn test_duplicate_movie_id_aborts_loading() {
        let movies = "Rank,Genre,Title,Description,Director,Actors,Year\n\
                      1,x,Split,d,M. Night Shyamalan,James McAvoy,2016\n\
                      1,x,Sing,d,Garth Jennings,Matthew McConaughey,2016\n";
        let dir = data_dir(movies, USERS, REVIEWS);
        let repo = MemoryRepository::new();

        let result = load_movies_and_tags(dir.path(), &repo);

        assert!(matches!(
            result,
            Err(LoadError::Repository(RepositoryError::DuplicateMovieId(_)))
        ));
        assert_eq!(repo.get_number_of_movies(), 1);
    }

    #[test]
    fn test_invalid_year_is_reported() {
        let movies = "Rank,Genre,Title,Description,Director,Actors,Year\n1,x,Split,d,Someone,Actor,soon\n";
        let dir = data_dir(movies, USERS, REVIEWS);
        let repo = MemoryRepository::new();

        let result = load_movies_and_tags(dir.path(), &repo);

        assert!(matches!(
            result,
            Err(LoadError::InvalidField { column: "release_year", line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let repo = MemoryRepository::new();

        assert!(matches!(
            populate(dir.path(), &repo),
            Err(LoadError::Csv { .. })
        ));
    }

    #[test]
    fn test_timestamp_formats() {
        assert!(parse_timestamp("2020-02-28 14:31:26").is_some());
        assert!(parse_timestamp("2020-02-28T14:31:26").is_some());
        assert!(parse_timestamp("2020-02-28T14:31:26Z").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
