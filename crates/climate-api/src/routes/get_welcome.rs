use axum::response::Html;

const WELCOME: &str = "Available Routes:<br>\
/api/v1.0/precipitation - Returns a list of dictionaries of date and precipitation data for each measured day of the last 12 months of recordings<br>\
/api/v1.0/stations - Returns a list of station names<br>\
/api/v1.0/tobs - Returns a list of temperature observations for the most recently recorded year (only observations, no dates)<br>\
/api/v1.0/&lt;start&gt; - Returns a list of a dictionary of TMIN, TMAX, and TAVG temperature measurements for &lt;start&gt; and after. Must be in the format yyyy-mm-dd<br>\
/api/v1.0/&lt;start&gt;/&lt;end&gt; - Returns a list of a dictionary of TMIN, TMAX, and TAVG temperature measurements between &lt;start&gt; and &lt;end&gt;, inclusive. Must be in the format yyyy-mm-dd";

/// List the available routes.
pub async fn get_welcome() -> Html<&'static str> {
    Html(WELCOME)
}
