// Protocol flow tests against a scripted local stub server.
