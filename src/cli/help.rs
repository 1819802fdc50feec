//! Static help screens.

/// Help topics addressable as `httpc help <command>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Get,
    Post,
}

/// Printed when the line is exactly the program name.
pub const USAGE_HINT: &str = "\
Usage:
\thttpc command [arguments]
Use \"httpc help\" for the list of commands.";

pub fn render(topic: Option<Topic>) -> &'static str {
    match topic {
        None => GENERAL,
        Some(Topic::Get) => GET,
        Some(Topic::Post) => POST,
    }
}

const GENERAL: &str = "\
httpc is a curl-like application but supports HTTP protocol only.
Usage:
\thttpc command [arguments]
The commands are:
\tget\texecutes a HTTP GET request and prints the response.
\tpost\texecutes a HTTP POST request and prints the response.
\thelp\tprints this screen.
Use \"httpc help [command]\" for more information about a command.";

const GET: &str = "\
usage: httpc get [-v] [-h key:value] URL

Get executes a HTTP GET request for a given URL.

\t-v\t\tPrints the detail of the response such as protocol, status, and headers.
\t-h key:value\tAssociates headers to HTTP Request with the format 'key:value'.";

const POST: &str = "\
usage: httpc post [-v] [-h key:value] [-d inline-data] [-f file] URL

Post executes a HTTP POST request for a given URL with inline data or from file.

\t-v\t\tPrints the detail of the response such as protocol, status, and headers.
\t-h key:value\tAssociates headers to HTTP Request with the format 'key:value'.
\t-d string\tAssociates an inline data to the body HTTP POST request.
\t-f file\t\tAssociates the content of a file to the body HTTP POST request.

Either [-d] or [-f] can be used but not both.";
