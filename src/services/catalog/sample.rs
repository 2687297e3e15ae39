//! Built-in listing used when no remote catalog is available.

/// `(id, title, pipe-delimited genres, release year)`
pub const SAMPLE_MOVIES: [(i64, &str, &str, i32); 30] = [
    (1, "The Shawshank Redemption", "Drama", 1994),
    (2, "The Godfather", "Crime|Drama", 1972),
    (3, "The Dark Knight", "Action|Crime|Drama", 2008),
    (4, "Pulp Fiction", "Crime|Drama", 1994),
    (5, "Forrest Gump", "Drama|Romance", 1994),
    (6, "Inception", "Action|Sci-Fi", 2010),
    (7, "The Matrix", "Action|Sci-Fi", 1999),
    (8, "Goodfellas", "Crime|Drama", 1990),
    (9, "The Silence of the Lambs", "Crime|Horror|Thriller", 1991),
    (10, "Schindler's List", "Biography|Drama|History", 1993),
    (11, "Titanic", "Drama|Romance", 1997),
    (12, "Avatar", "Action|Adventure|Fantasy", 2009),
    (13, "Avengers: Endgame", "Action|Adventure|Drama", 2019),
    (14, "Spider-Man: No Way Home", "Action|Adventure|Fantasy", 2021),
    (15, "Top Gun: Maverick", "Action|Drama", 2022),
    (16, "Black Panther", "Action|Adventure|Sci-Fi", 2018),
    (17, "The Lion King", "Animation|Adventure|Drama", 1994),
    (18, "Toy Story", "Animation|Adventure|Comedy", 1995),
    (19, "Finding Nemo", "Animation|Adventure|Family", 2003),
    (20, "The Incredibles", "Animation|Action|Adventure", 2004),
    (21, "Frozen", "Animation|Adventure|Comedy", 2013),
    (22, "Moana", "Animation|Adventure|Comedy", 2016),
    (23, "Coco", "Animation|Adventure|Family", 2017),
    (24, "Inside Out", "Animation|Adventure|Comedy", 2015),
    (25, "Up", "Animation|Adventure|Comedy", 2009),
    (26, "WALL-E", "Animation|Adventure|Drama", 2008),
    (27, "Ratatouille", "Animation|Comedy|Family", 2007),
    (28, "Monsters, Inc.", "Animation|Comedy|Family", 2001),
    (29, "The Departed", "Crime|Drama|Thriller", 2006),
    (30, "Casino", "Crime|Drama", 1995),
];
