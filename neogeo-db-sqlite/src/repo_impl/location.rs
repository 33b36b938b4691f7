use super::*;

impl LocationRepo for DbReadWrite<'_> {
    fn create_location(&self, location: Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn update_location(&self, location: &Location) -> Result<()> {
        update_location(&mut self.conn.borrow_mut(), location)
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), query)
    }
}

impl LocationRepo for DbConnection<'_> {
    fn create_location(&self, location: Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn update_location(&self, location: &Location) -> Result<()> {
        update_location(&mut self.conn.borrow_mut(), location)
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), query)
    }
}

impl LocationRepo for DbReadOnly<'_> {
    fn create_location(&self, _location: Location) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_location(&self, _location: &Location) -> Result<()> {
        Err(read_only_violation())
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), query)
    }
}

fn insert_location_children(
    conn: &mut SqliteConnection,
    parent_rowid: i64,
    addresses: &[String],
    names: &[String],
) -> std::result::Result<(), DieselError> {
    for (position, address) in addresses.iter().enumerate() {
        let new_address = models::NewLocationAddress {
            parent_rowid,
            position: position as i32,
            address,
        };
        diesel::insert_into(schema::location_address::table)
            .values(&new_address)
            .execute(conn)?;
    }
    for (position, name) in names.iter().enumerate() {
        let new_name = models::NewLocationName {
            parent_rowid,
            position: position as i32,
            name,
        };
        diesel::insert_into(schema::location_name::table)
            .values(&new_name)
            .execute(conn)?;
    }
    Ok(())
}

fn resolve_location_rowid(
    conn: &mut SqliteConnection,
    id: &str,
) -> std::result::Result<i64, DieselError> {
    use schema::location::dsl;
    schema::location::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
}

fn create_location(conn: &mut SqliteConnection, location: Location) -> Result<()> {
    let Location {
        id,
        addresses,
        names,
        point,
        enabled,
    } = location;
    let new_location = models::NewLocation {
        id: id.as_str(),
        lng: point.x,
        lat: point.y,
        enabled,
    };
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(schema::location::table)
            .values(&new_location)
            .execute(conn)?;
        let rowid = resolve_location_rowid(conn, id.as_str())?;
        insert_location_children(conn, rowid, &addresses, &names)
    })
    .map_err(|err| {
        log::warn!("Failed to create location '{id}': {err}");
        from_diesel_err(err)
    })
}

fn update_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    let Location {
        id,
        addresses,
        names,
        point,
        enabled,
    } = location;
    conn.transaction::<_, DieselError, _>(|conn| {
        let rowid = resolve_location_rowid(conn, id.as_str())?;
        {
            use schema::location::dsl;
            let _count = diesel::update(schema::location::table.filter(dsl::rowid.eq(rowid)))
                .set((
                    dsl::lng.eq(point.x),
                    dsl::lat.eq(point.y),
                    dsl::enabled.eq(*enabled),
                ))
                .execute(conn)?;
            debug_assert_eq!(1, _count);
        }
        // Collections are replaced as a whole
        {
            use schema::location_address::dsl;
            diesel::delete(schema::location_address::table.filter(dsl::parent_rowid.eq(rowid)))
                .execute(conn)?;
        }
        {
            use schema::location_name::dsl;
            diesel::delete(schema::location_name::table.filter(dsl::parent_rowid.eq(rowid)))
                .execute(conn)?;
        }
        insert_location_children(conn, rowid, addresses, names)
    })
    .map_err(from_diesel_err)
}

fn load_location_addresses(conn: &mut SqliteConnection, parent_rowid: i64) -> Result<Vec<String>> {
    use schema::location_address::dsl;
    Ok(schema::location_address::table
        .filter(dsl::parent_rowid.eq(parent_rowid))
        .order_by(dsl::position)
        .load::<models::LocationAddress>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::LocationAddress {
                 parent_rowid: _,
                 position: _,
                 address,
             }| address,
        )
        .collect())
}

fn load_location_names(conn: &mut SqliteConnection, parent_rowid: i64) -> Result<Vec<String>> {
    use schema::location_name::dsl;
    Ok(schema::location_name::table
        .filter(dsl::parent_rowid.eq(parent_rowid))
        .order_by(dsl::position)
        .load::<models::LocationName>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::LocationName {
                 parent_rowid: _,
                 position: _,
                 name,
             }| name,
        )
        .collect())
}

fn load_location(conn: &mut SqliteConnection, location: models::Location) -> Result<Location> {
    let models::Location {
        rowid,
        id,
        lng,
        lat,
        enabled,
    } = location;
    let addresses = load_location_addresses(conn, rowid)?;
    let names = load_location_names(conn, rowid)?;
    Ok(Location {
        id: id.into(),
        addresses,
        names,
        point: GeoPoint::new(lng, lat),
        enabled,
    })
}

fn load_locations(conn: &mut SqliteConnection, rows: Vec<models::Location>) -> Result<Vec<Location>> {
    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        results.push(load_location(conn, row)?);
    }
    Ok(results)
}

fn get_location(conn: &mut SqliteConnection, id: &str) -> Result<Location> {
    use schema::location::dsl;
    let row = schema::location::table
        .filter(dsl::id.eq(id))
        .first::<models::Location>(conn)
        .map_err(from_diesel_err)?;
    load_location(conn, row)
}

fn all_locations(conn: &mut SqliteConnection) -> Result<Vec<Location>> {
    use schema::location::dsl;
    let rows = schema::location::table
        .order_by(dsl::rowid)
        .load::<models::Location>(conn)
        .map_err(from_diesel_err)?;
    load_locations(conn, rows)
}

fn count_locations(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::location::dsl;
    Ok(schema::location::table
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

const LIKE_ESCAPE_CHAR: char = '\\';

fn escape_like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE_CHAR {
            escaped.push(LIKE_ESCAPE_CHAR);
        }
        escaped.push(c);
    }
    escaped
}

fn query_locations(conn: &mut SqliteConnection, query: &LocationQuery) -> Result<Vec<Location>> {
    use schema::{location::dsl, location_name::dsl as name_dsl};

    let LocationQuery {
        enabled,
        name,
        bbox,
    } = query;

    let mut sql = schema::location::table.order_by(dsl::rowid).into_boxed();

    if let Some(enabled) = enabled {
        sql = sql.filter(dsl::enabled.eq(*enabled));
    }

    if let Some(name) = name {
        // The LIKE operator of SQLite is case-insensitive for ASCII characters
        let pattern = format!("%{}%", escape_like_pattern(name));
        sql = sql.filter(
            dsl::rowid.eq_any(
                schema::location_name::table
                    .select(name_dsl::parent_rowid)
                    .filter(name_dsl::name.like(pattern).escape(LIKE_ESCAPE_CHAR)),
            ),
        );
    }

    if let Some(bbox) = bbox {
        let (sw_lat, sw_lng) = bbox.south_west().to_lat_lng_deg();
        let (ne_lat, ne_lng) = bbox.north_east().to_lat_lng_deg();
        sql = sql.filter(dsl::lat.between(sw_lat, ne_lat));
        if bbox.wraps_antimeridian() {
            sql = sql.filter(dsl::lng.ge(sw_lng).or(dsl::lng.le(ne_lng)));
        } else {
            sql = sql.filter(dsl::lng.between(sw_lng, ne_lng));
        }
    }

    if query.is_empty() {
        log::debug!("Loading all locations at once");
    }

    let rows = sql
        .load::<models::Location>(conn)
        .map_err(from_diesel_err)?;
    load_locations(conn, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters_of_like_patterns() {
        assert_eq!("foo", escape_like_pattern("foo"));
        assert_eq!("100\\%", escape_like_pattern("100%"));
        assert_eq!("a\\_b", escape_like_pattern("a_b"));
        assert_eq!("a\\\\b", escape_like_pattern("a\\b"));
    }
}
